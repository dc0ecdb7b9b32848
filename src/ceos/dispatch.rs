use super::*;
use header::{RecordCodes, RecordHeader};
use std::{collections::HashMap, sync::LazyLock};

/// The two observed byte layouts of the format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum Revision {
    /// First sub-type code 18 (ERS, JERS, RADARSAT products).
    A,
    /// First sub-type code 10 and third sub-type code 31 (ALOS products).
    B,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    VolumeDescriptor,
    FilePointer,
    Text,
    FileDescriptor,
    DataQualitySummary,
    DataSetSummary(Revision),
    MapProjection(Revision),
    PlatformPosition(Revision),
    Attitude,
    RadiometricData,
    RadiometricCompensation,
    RadarParameterUpdate,
    FacilityRelatedGeneral(Revision),
    FacilityRelatedPcsQuality,
    FacilityRelated11,
}
impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::VolumeDescriptor => "Volume Descriptor Record",
            Self::FilePointer => "File Pointer Record",
            Self::Text => "Text Record",
            Self::FileDescriptor => "File Descriptor Record",
            Self::DataQualitySummary => "Data Quality Summary Record",
            Self::DataSetSummary(_) => "Data Set Summary Record",
            Self::MapProjection(_) => "Map Projection Data Record",
            Self::PlatformPosition(_) => "Platform Position Data Record",
            Self::Attitude => "Attitude Data Record",
            Self::RadiometricData => "Radiometric Data Record",
            Self::RadiometricCompensation => "Radiometric Compensation Data Record",
            Self::RadarParameterUpdate => "Radar Parameter Update Data Record",
            Self::FacilityRelatedGeneral(_) => "Facility Related Data Record (General)",
            Self::FacilityRelatedPcsQuality => "Facility Related Data Record (PCS Quality)",
            Self::FacilityRelated11 => "Facility Related Data Record (11)",
        }
    }

    pub fn revision(&self) -> Option<Revision> {
        match self {
            Self::DataSetSummary(revision)
            | Self::MapProjection(revision)
            | Self::PlatformPosition(revision)
            | Self::FacilityRelatedGeneral(revision) => Some(*revision),
            _ => None,
        }
    }

    /// All code tuples a record of this kind may carry.
    pub fn accepted_codes(&self) -> &'static [[u8; 4]] {
        match self {
            Self::VolumeDescriptor => &[[192, 192, 18, 18]],
            Self::FilePointer => &[[219, 192, 18, 18]],
            Self::Text => &[[18, 63, 18, 18], [18, 192, 18, 18]],
            Self::FileDescriptor => &[[11, 192, 18, 18], [63, 192, 18, 18]],
            Self::DataQualitySummary => &[[18, 60, 18, 20]],
            Self::DataSetSummary(Revision::A) => &[[18, 10, 18, 20]],
            Self::DataSetSummary(Revision::B) => &[[10, 10, 31, 20]],
            Self::MapProjection(Revision::A) => &[[18, 20, 18, 20]],
            Self::MapProjection(Revision::B) => &[[10, 20, 31, 20]],
            Self::PlatformPosition(Revision::A) => &[[18, 30, 18, 20]],
            Self::PlatformPosition(Revision::B) => &[[10, 30, 31, 20]],
            Self::Attitude => &[[18, 40, 18, 20]],
            Self::RadiometricData => &[[18, 50, 18, 20]],
            Self::RadiometricCompensation => &[[18, 51, 18, 20], [10, 40, 31, 20]],
            Self::RadarParameterUpdate => &[[18, 100, 18, 20], [10, 100, 31, 20]],
            Self::FacilityRelatedGeneral(Revision::A) => &[[18, 200, 18, 50]],
            Self::FacilityRelatedGeneral(Revision::B) => &[[10, 200, 31, 50]],
            Self::FacilityRelatedPcsQuality => &[[18, 200, 18, 50]],
            Self::FacilityRelated11 => &[[18, 200, 18, 70]],
        }
    }

    pub fn accepts(&self, codes: RecordCodes) -> bool {
        self.accepted_codes().contains(&codes.0)
    }
}
impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.revision() {
            Some(revision) => write!(f, "{} (revision {revision:?})", self.label()),
            None => write!(f, "{}", self.label()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Known(RecordKind),
    Unrecognized,
}

struct DispatchEntry {
    codes: [u8; 4],
    kind: RecordKind,
}

const fn entry(codes: [u8; 4], kind: RecordKind) -> DispatchEntry {
    DispatchEntry { codes, kind }
}

/// Every code tuple with the kind it selects.
///
/// (18,200,18,50) is shared by the general and PCS quality facility records; the
/// table maps it to the general form and [refine] sorts them out.
const DISPATCH_TABLE: [DispatchEntry; 22] = [
    entry([192, 192, 18, 18], RecordKind::VolumeDescriptor),
    entry([219, 192, 18, 18], RecordKind::FilePointer),
    entry([18, 63, 18, 18], RecordKind::Text),
    entry([18, 192, 18, 18], RecordKind::Text),
    entry([11, 192, 18, 18], RecordKind::FileDescriptor),
    entry([63, 192, 18, 18], RecordKind::FileDescriptor),
    entry([18, 60, 18, 20], RecordKind::DataQualitySummary),
    entry([18, 10, 18, 20], RecordKind::DataSetSummary(Revision::A)),
    entry([10, 10, 31, 20], RecordKind::DataSetSummary(Revision::B)),
    entry([18, 20, 18, 20], RecordKind::MapProjection(Revision::A)),
    entry([10, 20, 31, 20], RecordKind::MapProjection(Revision::B)),
    entry([18, 30, 18, 20], RecordKind::PlatformPosition(Revision::A)),
    entry([10, 30, 31, 20], RecordKind::PlatformPosition(Revision::B)),
    entry([18, 40, 18, 20], RecordKind::Attitude),
    entry([18, 50, 18, 20], RecordKind::RadiometricData),
    entry([18, 51, 18, 20], RecordKind::RadiometricCompensation),
    entry([10, 40, 31, 20], RecordKind::RadiometricCompensation),
    entry([18, 100, 18, 20], RecordKind::RadarParameterUpdate),
    entry([10, 100, 31, 20], RecordKind::RadarParameterUpdate),
    entry([18, 200, 18, 50], RecordKind::FacilityRelatedGeneral(Revision::A)),
    entry([10, 200, 31, 50], RecordKind::FacilityRelatedGeneral(Revision::B)),
    entry([18, 200, 18, 70], RecordKind::FacilityRelated11),
];

static DISPATCH_LOOKUP: LazyLock<HashMap<[u8; 4], RecordKind>> = LazyLock::new(|| {
    DISPATCH_TABLE
        .iter()
        .map(|entry| (entry.codes, entry.kind))
        .collect()
});

/// Declared length of the PCS quality form of the facility related data record.
pub const PCS_QUALITY_RECORD_LENGTH: usize = 1620;

/// Map the four code bytes to a record kind. Only exact matches count.
pub fn classify(codes: RecordCodes) -> Classification {
    DISPATCH_LOOKUP
        .get(&codes.0)
        .map_or(Classification::Unrecognized, |kind| {
            Classification::Known(*kind)
        })
}

/// Resolve kinds that share a code tuple, using the rest of the header.
///
/// Facility related records coded (18,200,18,50) are the PCS quality form when their
/// declared length is [PCS_QUALITY_RECORD_LENGTH], the general form otherwise.
pub fn refine(kind: RecordKind, header: &RecordHeader) -> RecordKind {
    match kind {
        RecordKind::FacilityRelatedGeneral(Revision::A)
            if header.declared_length() == PCS_QUALITY_RECORD_LENGTH =>
        {
            RecordKind::FacilityRelatedPcsQuality
        }
        kind => kind,
    }
}

/// Record a [DiagnosticKind::HeaderMismatch] if `header` does not carry one of `kind`'s tuples.
pub(crate) fn check_magic(kind: RecordKind, header: &RecordHeader, ctx: &mut DecodingContext) {
    let found = header.codes();
    if !kind.accepts(found) {
        ctx.report(DiagnosticKind::HeaderMismatch { kind, found });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(codes: [u8; 4], length: u32) -> RecordHeader {
        RecordHeader {
            sequence_number: 1,
            first_subtype: codes[0],
            record_type: codes[1],
            second_subtype: codes[2],
            third_subtype: codes[3],
            length,
        }
    }

    #[test]
    fn classify_known_tuples() {
        use RecordKind::*;
        let cases = [
            ([192, 192, 18, 18], VolumeDescriptor),
            ([219, 192, 18, 18], FilePointer),
            ([18, 63, 18, 18], Text),
            ([18, 192, 18, 18], Text),
            ([11, 192, 18, 18], FileDescriptor),
            ([63, 192, 18, 18], FileDescriptor),
            ([18, 60, 18, 20], DataQualitySummary),
            ([18, 10, 18, 20], DataSetSummary(Revision::A)),
            ([10, 10, 31, 20], DataSetSummary(Revision::B)),
            ([10, 20, 31, 20], MapProjection(Revision::B)),
            ([18, 30, 18, 20], PlatformPosition(Revision::A)),
            ([18, 40, 18, 20], Attitude),
            ([18, 50, 18, 20], RadiometricData),
            ([10, 40, 31, 20], RadiometricCompensation),
            ([10, 100, 31, 20], RadarParameterUpdate),
            ([18, 200, 18, 50], FacilityRelatedGeneral(Revision::A)),
            ([10, 200, 31, 50], FacilityRelatedGeneral(Revision::B)),
            ([18, 200, 18, 70], FacilityRelated11),
        ];
        for (codes, kind) in cases {
            assert_eq!(
                Classification::Known(kind),
                classify(RecordCodes(codes)),
                "{codes:?}"
            );
        }
    }

    #[test]
    fn classify_requires_exact_match() {
        for codes in [[192, 192, 18, 19], [18, 10, 31, 20], [0, 0, 0, 0], [10, 10, 18, 20]] {
            assert_eq!(Classification::Unrecognized, classify(RecordCodes(codes)));
        }
    }

    #[test]
    fn every_dispatch_entry_is_accepted_by_its_kind() {
        for entry in DISPATCH_TABLE.iter() {
            assert!(
                entry.kind.accepts(RecordCodes(entry.codes)),
                "{} does not accept {:?}",
                entry.kind,
                entry.codes
            );
        }
        assert_eq!(22, DISPATCH_LOOKUP.len());
    }

    #[test]
    fn refine_facility_forms() {
        let general = RecordKind::FacilityRelatedGeneral(Revision::A);
        assert_eq!(
            RecordKind::FacilityRelatedPcsQuality,
            refine(general, &header([18, 200, 18, 50], 1620))
        );
        assert_eq!(general, refine(general, &header([18, 200, 18, 50], 12288)));
        let revision_b = RecordKind::FacilityRelatedGeneral(Revision::B);
        assert_eq!(revision_b, refine(revision_b, &header([10, 200, 31, 50], 1620)));
        assert_eq!(
            RecordKind::Attitude,
            refine(RecordKind::Attitude, &header([18, 40, 18, 20], 1620))
        );
    }

    #[test]
    fn mismatched_magic_is_reported() {
        let mut ctx = DecodingContext::at_offset(360);
        check_magic(
            RecordKind::Attitude,
            &header([18, 40, 18, 20], 16),
            &mut ctx,
        );
        assert!(ctx.diagnostics().is_empty());
        check_magic(
            RecordKind::Attitude,
            &header([10, 40, 31, 20], 16),
            &mut ctx,
        );
        assert_eq!(
            vec![Diagnostic {
                offset: 360,
                kind: DiagnosticKind::HeaderMismatch {
                    kind: RecordKind::Attitude,
                    found: RecordCodes([10, 40, 31, 20]),
                },
            }],
            ctx.diagnostics()
        );
    }

    #[test]
    fn labels() {
        assert_eq!(
            "Data Set Summary Record (revision B)",
            RecordKind::DataSetSummary(Revision::B).to_string()
        );
        assert_eq!("Attitude Data Record", RecordKind::Attitude.to_string());
    }
}
