//! Radiometric data and radiometric compensation records.

use super::*;
use field::{ascii, exp, field, fixed, int};

pub const RADIOMETRIC_DATA_LENGTH: usize = 9860;
/// Bytes before the first compensation table entry.
pub const COMPENSATION_FIXED_LENGTH: usize = 60;

const RADIOMETRIC_DATA_FIELDS: [FieldSpec; 20] = [
    field(13, 16, int(4), "-", "Radiometric data record sequence number"),
    field(17, 20, int(4), "-", "Number of radiometric data fields"),
    field(21, 36, fixed(16, 7), "dB", "Calibration factor"),
    field(37, 52, fixed(16, 7), "-", "Transmission distortion matrix DT(1,1) real"),
    field(53, 68, fixed(16, 7), "-", "Transmission distortion matrix DT(1,1) imaginary"),
    field(69, 84, fixed(16, 7), "-", "Transmission distortion matrix DT(1,2) real"),
    field(85, 100, fixed(16, 7), "-", "Transmission distortion matrix DT(1,2) imaginary"),
    field(101, 116, fixed(16, 7), "-", "Transmission distortion matrix DT(2,1) real"),
    field(117, 132, fixed(16, 7), "-", "Transmission distortion matrix DT(2,1) imaginary"),
    field(133, 148, fixed(16, 7), "-", "Transmission distortion matrix DT(2,2) real"),
    field(149, 164, fixed(16, 7), "-", "Transmission distortion matrix DT(2,2) imaginary"),
    field(165, 180, fixed(16, 7), "-", "Reception distortion matrix DR(1,1) real"),
    field(181, 196, fixed(16, 7), "-", "Reception distortion matrix DR(1,1) imaginary"),
    field(197, 212, fixed(16, 7), "-", "Reception distortion matrix DR(1,2) real"),
    field(213, 228, fixed(16, 7), "-", "Reception distortion matrix DR(1,2) imaginary"),
    field(229, 244, fixed(16, 7), "-", "Reception distortion matrix DR(2,1) real"),
    field(245, 260, fixed(16, 7), "-", "Reception distortion matrix DR(2,1) imaginary"),
    field(261, 276, fixed(16, 7), "-", "Reception distortion matrix DR(2,2) real"),
    field(277, 292, fixed(16, 7), "-", "Reception distortion matrix DR(2,2) imaginary"),
    field(293, 9860, ascii(9568), "-", "Spare"),
];

const ENTRY_COUNT: FieldSpec = field(53, 56, int(4), "-", "Number of compensation table entries");

const COMPENSATION_FIELDS: [FieldSpec; 8] = [
    field(13, 16, int(4), "-", "Radiometric compensation record sequence number"),
    field(17, 20, int(4), "-", "SAR channel indicator"),
    field(21, 28, ascii(8), "-", "Compensation data designator"),
    field(29, 44, ascii(16), "-", "Compensation data descriptor"),
    field(45, 48, int(4), "-", "Number of compensation records"),
    field(49, 52, int(4), "-", "Sequence number in the full compensation table"),
    ENTRY_COUNT,
    field(57, 60, ascii(4), "-", "Spare"),
];

const ENTRY_FIELDS: [FieldSpec; 2] = [
    field(1, 16, exp(16, 7), "pixels", "Compensation sample offset"),
    field(17, 32, exp(16, 7), "dB", "Compensation gain"),
];

pub fn data_table() -> TableBuilder {
    fixed_layout(&RADIOMETRIC_DATA_FIELDS)
}

/// The number of compensation table entries the record announces.
pub fn peek_count(buffer: &[u8]) -> usize {
    decoder::peek_count(buffer, &ENTRY_COUNT)
}

pub fn build_compensation_table(count: usize) -> TableBuilder {
    fixed_layout(&COMPENSATION_FIELDS).repeat(
        "entry",
        COMPENSATION_FIXED_LENGTH + 1,
        count,
        &ENTRY_FIELDS,
    )
}

pub fn decode_data(
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let record = decode_with_layout(RecordKind::RadiometricData, buffer, header, data_table(), ctx);
    Ok(RecordValue::RadiometricData(record))
}

pub fn decode_compensation(
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let entries = peek_count(buffer);
    let table = build_compensation_table(entries);
    let record = decode_with_layout(RecordKind::RadiometricCompensation, buffer, header, table, ctx);
    Ok(RecordValue::RadiometricCompensation { entries, record })
}
