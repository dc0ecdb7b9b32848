use super::*;
use field::{ascii, exp, field, int};

pub const FIXED_LENGTH: usize = 16;

const DATA_SET_COUNT: FieldSpec = field(13, 16, int(4), "-", "Number of radar parameter data sets");

const DATA_SET_FIELDS: [FieldSpec; 5] = [
    field(1, 24, ascii(24), "-", "GMT of radar parameter change"),
    field(25, 28, int(4), "-", "SAR channel indicator"),
    field(29, 36, int(8), "-", "Range line number of change"),
    field(37, 52, exp(16, 7), "us", "Sampling window start time"),
    field(53, 68, exp(16, 7), "dB", "Receiver gain"),
];

/// The number of parameter data sets the record announces.
pub fn peek_count(buffer: &[u8]) -> usize {
    decoder::peek_count(buffer, &DATA_SET_COUNT)
}

pub fn build_table(count: usize) -> TableBuilder {
    fixed_layout(&[DATA_SET_COUNT]).repeat("data set", FIXED_LENGTH + 1, count, &DATA_SET_FIELDS)
}

pub fn decode(
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let data_sets = peek_count(buffer);
    let table = build_table(data_sets);
    let record = decode_with_layout(RecordKind::RadarParameterUpdate, buffer, header, table, ctx);
    Ok(RecordValue::RadarParameterUpdate { data_sets, record })
}
