//! Platform position data record: orbit state vectors at equal time intervals.

use super::*;
use field::{ascii, double, field, fixed, group_width, int};

/// Bytes before the first state vector.
pub const FIXED_LENGTH: usize = 386;

const POINT_COUNT: FieldSpec = field(141, 144, int(4), "-", "Number of data points");

const FIXED_FIELDS: [FieldSpec; 22] = [
    field(13, 44, ascii(32), "-", "Orbital elements designator"),
    field(45, 60, fixed(16, 7), "m", "Position vector x at first point"),
    field(61, 76, fixed(16, 7), "m", "Position vector y at first point"),
    field(77, 92, fixed(16, 7), "m", "Position vector z at first point"),
    field(93, 108, fixed(16, 7), "m/s", "Velocity vector x at first point"),
    field(109, 124, fixed(16, 7), "m/s", "Velocity vector y at first point"),
    field(125, 140, fixed(16, 7), "m/s", "Velocity vector z at first point"),
    POINT_COUNT,
    field(145, 148, int(4), "-", "Year of data point"),
    field(149, 152, int(4), "-", "Month of data point"),
    field(153, 156, int(4), "-", "Day of data point"),
    field(157, 160, int(4), "-", "Day in the year"),
    field(161, 182, double(22, 15), "s", "Seconds of day"),
    field(183, 204, double(22, 15), "s", "Time interval between data points"),
    field(205, 268, ascii(64), "-", "Reference coordinate system"),
    field(269, 290, double(22, 15), "deg", "Greenwich mean hour angle"),
    field(291, 306, fixed(16, 7), "m", "Along track position error"),
    field(307, 322, fixed(16, 7), "m", "Across track position error"),
    field(323, 338, fixed(16, 7), "m", "Radial position error"),
    field(339, 354, fixed(16, 7), "deg/s", "Along track velocity error"),
    field(355, 370, fixed(16, 7), "deg/s", "Across track velocity error"),
    field(371, 386, fixed(16, 7), "deg/s", "Radial velocity error"),
];

const POINT_FIELDS: [FieldSpec; 6] = [
    field(1, 22, double(22, 15), "m", "Position vector x"),
    field(23, 44, double(22, 15), "m", "Position vector y"),
    field(45, 66, double(22, 15), "m", "Position vector z"),
    field(67, 88, double(22, 15), "m/s", "Velocity vector x"),
    field(89, 110, double(22, 15), "m/s", "Velocity vector y"),
    field(111, 132, double(22, 15), "m/s", "Velocity vector z"),
];

/// Follows the last point, relative to the end of the points.
const LEAP_SECOND: [FieldSpec; 1] = [field(1, 1, ascii(1), "-", "Leap second flag")];

/// The number of state vectors the record announces.
pub fn peek_count(buffer: &[u8]) -> usize {
    decoder::peek_count(buffer, &POINT_COUNT)
}

pub fn build_table(count: usize) -> TableBuilder {
    let points_end = FIXED_LENGTH + count * group_width(&POINT_FIELDS);
    fixed_layout(&FIXED_FIELDS)
        .repeat("point", FIXED_LENGTH + 1, count, &POINT_FIELDS)
        .shifted(points_end, &LEAP_SECOND)
}

pub fn decode(
    revision: Revision,
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let points = peek_count(buffer);
    let kind = RecordKind::PlatformPosition(revision);
    let record = decode_with_layout(kind, buffer, header, build_table(points), ctx);
    Ok(RecordValue::PlatformPosition {
        revision,
        points,
        record,
    })
}
