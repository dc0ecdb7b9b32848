//! Field layouts and decoders for every supported record kind.
//!
//! Fixed layouts are plain [FieldSpec] tables. Records with a repeat group read the
//! embedded count with `peek_count` first and lay out the table with `build_table`.

use super::*;
use decoder::{decode_table, FieldRecord};
use dispatch::{check_magic, RecordKind, Revision};
use field::{FieldSpec, TableBuilder};
use header::RecordHeader;

pub mod attitude;
pub mod data_quality;
pub mod data_set_summary;
pub mod facility;
pub mod file_descriptor;
pub mod map_projection;
pub mod platform_position;
pub mod radar_parameter;
pub mod radiometric;
pub mod volume;

/// A decoded record, together with what its kind adds to the field values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordValue {
    VolumeDescriptor(FieldRecord),
    FilePointer(FieldRecord),
    Text(FieldRecord),
    FileDescriptor {
        /// Bytes of low resolution image data stored right after the record.
        low_resolution_bytes: usize,
        record: FieldRecord,
    },
    DataQualitySummary(FieldRecord),
    DataSetSummary {
        revision: Revision,
        record: FieldRecord,
    },
    MapProjection {
        revision: Revision,
        record: FieldRecord,
    },
    PlatformPosition {
        revision: Revision,
        points: usize,
        record: FieldRecord,
    },
    Attitude {
        points: usize,
        record: FieldRecord,
    },
    RadiometricData(FieldRecord),
    RadiometricCompensation {
        entries: usize,
        record: FieldRecord,
    },
    RadarParameterUpdate {
        data_sets: usize,
        record: FieldRecord,
    },
    FacilityRelatedGeneral {
        revision: Revision,
        record: FieldRecord,
    },
    FacilityRelatedPcsQuality(FieldRecord),
    FacilityRelated11 {
        coefficients: usize,
        record: FieldRecord,
    },
}
impl RecordValue {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::VolumeDescriptor(_) => RecordKind::VolumeDescriptor,
            Self::FilePointer(_) => RecordKind::FilePointer,
            Self::Text(_) => RecordKind::Text,
            Self::FileDescriptor { .. } => RecordKind::FileDescriptor,
            Self::DataQualitySummary(_) => RecordKind::DataQualitySummary,
            Self::DataSetSummary { revision, .. } => RecordKind::DataSetSummary(*revision),
            Self::MapProjection { revision, .. } => RecordKind::MapProjection(*revision),
            Self::PlatformPosition { revision, .. } => RecordKind::PlatformPosition(*revision),
            Self::Attitude { .. } => RecordKind::Attitude,
            Self::RadiometricData(_) => RecordKind::RadiometricData,
            Self::RadiometricCompensation { .. } => RecordKind::RadiometricCompensation,
            Self::RadarParameterUpdate { .. } => RecordKind::RadarParameterUpdate,
            Self::FacilityRelatedGeneral { revision, .. } => {
                RecordKind::FacilityRelatedGeneral(*revision)
            }
            Self::FacilityRelatedPcsQuality(_) => RecordKind::FacilityRelatedPcsQuality,
            Self::FacilityRelated11 { .. } => RecordKind::FacilityRelated11,
        }
    }

    pub fn record(&self) -> &FieldRecord {
        match self {
            Self::VolumeDescriptor(record)
            | Self::FilePointer(record)
            | Self::Text(record)
            | Self::DataQualitySummary(record)
            | Self::RadiometricData(record)
            | Self::FacilityRelatedPcsQuality(record) => record,
            Self::FileDescriptor { record, .. }
            | Self::DataSetSummary { record, .. }
            | Self::MapProjection { record, .. }
            | Self::PlatformPosition { record, .. }
            | Self::Attitude { record, .. }
            | Self::RadiometricCompensation { record, .. }
            | Self::RadarParameterUpdate { record, .. }
            | Self::FacilityRelatedGeneral { record, .. }
            | Self::FacilityRelated11 { record, .. } => record,
        }
    }

    pub fn label(&self) -> String {
        self.kind().to_string()
    }

    /// Length established by decoding, see [FieldRecord::decoded_length].
    pub fn decoded_length(&self) -> Option<usize> {
        self.record().decoded_length()
    }

    /// Bytes following the record that belong to it without being part of its fields.
    pub fn trailing_bytes(&self) -> usize {
        match self {
            Self::FileDescriptor {
                low_resolution_bytes,
                ..
            } => *low_resolution_bytes,
            _ => 0,
        }
    }

    /// Number of repeat groups, for kinds that have one.
    pub fn repeat_count(&self) -> Option<usize> {
        match self {
            Self::PlatformPosition { points, .. } | Self::Attitude { points, .. } => Some(*points),
            Self::RadiometricCompensation { entries, .. } => Some(*entries),
            Self::RadarParameterUpdate { data_sets, .. } => Some(*data_sets),
            Self::FacilityRelated11 { coefficients, .. } => Some(*coefficients),
            _ => None,
        }
    }
}

/// Decode the record at the start of `buffer` as `kind`.
pub fn decode_record(
    buffer: &[u8],
    header: &RecordHeader,
    kind: RecordKind,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    match kind {
        RecordKind::VolumeDescriptor => volume::decode_volume_descriptor(buffer, header, ctx),
        RecordKind::FilePointer => volume::decode_file_pointer(buffer, header, ctx),
        RecordKind::Text => volume::decode_text(buffer, header, ctx),
        RecordKind::FileDescriptor => file_descriptor::decode(buffer, header, ctx),
        RecordKind::DataQualitySummary => data_quality::decode(buffer, header, ctx),
        RecordKind::DataSetSummary(revision) => {
            data_set_summary::decode(revision, buffer, header, ctx)
        }
        RecordKind::MapProjection(revision) => map_projection::decode(revision, buffer, header, ctx),
        RecordKind::PlatformPosition(revision) => {
            platform_position::decode(revision, buffer, header, ctx)
        }
        RecordKind::Attitude => attitude::decode(buffer, header, ctx),
        RecordKind::RadiometricData => radiometric::decode_data(buffer, header, ctx),
        RecordKind::RadiometricCompensation => {
            radiometric::decode_compensation(buffer, header, ctx)
        }
        RecordKind::RadarParameterUpdate => radar_parameter::decode(buffer, header, ctx),
        RecordKind::FacilityRelatedGeneral(revision) => {
            facility::decode_general(revision, buffer, header, ctx)
        }
        RecordKind::FacilityRelatedPcsQuality => facility::decode_pcs_quality(buffer, header, ctx),
        RecordKind::FacilityRelated11 => facility::decode_11(buffer, header, ctx),
    }
}

/// Check the magic of `header` against `kind` and decode `table`.
///
/// A layout ending before the declared length is reported, but the table is decoded
/// as built, so a complete decode yields the layout's own extent.
fn decode_with_layout(
    kind: RecordKind,
    buffer: &[u8],
    header: &RecordHeader,
    table: TableBuilder,
    ctx: &mut DecodingContext,
) -> FieldRecord {
    check_magic(kind, header, ctx);
    let declared = header.declared_length();
    let extent = table.extent();
    if extent < declared {
        ctx.report(DiagnosticKind::LengthDisagreement {
            decoded: extent,
            declared,
        });
    }
    decode_table(buffer, header, table.build(), ctx)
}

/// A header plus fixed fields table.
fn fixed_layout(fields: &[FieldSpec]) -> TableBuilder {
    TableBuilder::with_header().fields(fields)
}
