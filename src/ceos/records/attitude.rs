//! Attitude data record: platform pitch, roll and yaw with their rates.

use super::*;
use field::{exp, field, group_width, int};

pub const FIXED_LENGTH: usize = 16;

const POINT_COUNT: FieldSpec = field(13, 16, int(4), "-", "Number of attitude data points");

const POINT_FIELDS: [FieldSpec; 14] = [
    field(1, 4, int(4), "-", "Day of the year"),
    field(5, 12, int(8), "ms", "Millisecond of day"),
    field(13, 16, int(4), "-", "Pitch data quality flag"),
    field(17, 20, int(4), "-", "Roll data quality flag"),
    field(21, 24, int(4), "-", "Yaw data quality flag"),
    field(25, 38, exp(14, 6), "deg", "Pitch"),
    field(39, 52, exp(14, 6), "deg", "Roll"),
    field(53, 66, exp(14, 6), "deg", "Yaw"),
    field(67, 70, int(4), "-", "Pitch rate data quality flag"),
    field(71, 74, int(4), "-", "Roll rate data quality flag"),
    field(75, 78, int(4), "-", "Yaw rate data quality flag"),
    field(79, 92, exp(14, 6), "deg/s", "Pitch rate"),
    field(93, 106, exp(14, 6), "deg/s", "Roll rate"),
    field(107, 120, exp(14, 6), "deg/s", "Yaw rate"),
];

pub const POINT_LENGTH: usize = group_width(&POINT_FIELDS);

/// The number of attitude points the record announces.
pub fn peek_count(buffer: &[u8]) -> usize {
    decoder::peek_count(buffer, &POINT_COUNT)
}

pub fn build_table(count: usize) -> TableBuilder {
    fixed_layout(&[POINT_COUNT]).repeat("point", FIXED_LENGTH + 1, count, &POINT_FIELDS)
}

pub fn decode(
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let points = peek_count(buffer);
    let record = decode_with_layout(RecordKind::Attitude, buffer, header, build_table(points), ctx);
    Ok(RecordValue::Attitude { points, record })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ceos::{
        decoder::FieldStatus, field::tests::assert_well_formed, header::read_header,
        tests::RecordBuilder,
    };

    fn two_point_record(declared: u32) -> Vec<u8> {
        RecordBuilder::new(5, [18, 40, 18, 20], declared)
            .put(13, "0002")
            .put(17, " 123")
            .put(21, "45296000")
            .put(41, "  1.234560E-02")
            .put(137, " 124")
            .put(243, " -4.000000E-04")
            .build()
    }

    #[test]
    fn table_for_two_points() {
        let table = build_table(2).build();
        assert_eq!(7 + 2 * 14, table.len());
        assert_eq!(16 + 2 * 120, assert_well_formed(&table));
        assert_eq!(120, POINT_LENGTH);
        assert_eq!((137, 140), table[21].byte_range());
        assert_eq!("Day of the year [point 2]", table[21].label());
    }

    #[test]
    fn decode_two_points() {
        let data = two_point_record(256);
        let header = read_header(&data).unwrap();
        assert_eq!(2, peek_count(&data));
        let mut ctx = DecodingContext::default();
        let value = decode(&data, &header, &mut ctx).unwrap();
        assert_eq!(Some(2), value.repeat_count());
        let record = value.record();
        assert_eq!(35, record.fields.len());
        assert_eq!(vec![" 123", " 124"], record.values_of("Day of the year"));
        assert_eq!(Some("45296000"), record.value_of("Millisecond of day"));
        assert_eq!(vec!["  1.234560E-02", ""], record.values_of("Pitch"));
        assert_eq!(vec!["", " -4.000000E-04"], record.values_of("Yaw rate"));
        assert_eq!(Some(256), value.decoded_length());
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn declared_length_does_not_add_fields() {
        let data = two_point_record(300);
        let header = read_header(&data).unwrap();
        let mut ctx = DecodingContext::at_offset(16);
        let value = decode(&data, &header, &mut ctx).unwrap();
        assert_eq!(7 + 2 * 14, value.record().fields.len());
        assert_eq!(Some(256), value.decoded_length());
        assert_eq!(
            vec![DiagnosticKind::LengthDisagreement {
                decoded: 256,
                declared: 300
            }],
            ctx.diagnostics().iter().map(|d| d.kind.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn third_group_is_never_decoded() {
        // Bytes for a third point are present but not announced.
        let data = RecordBuilder::new(5, [18, 40, 18, 20], 256)
            .put(13, "0002")
            .put(257, " 125")
            .build();
        let header = read_header(&data).unwrap();
        let value = decode(&data, &header, &mut DecodingContext::default()).unwrap();
        let record = value.record();
        assert_eq!(35, record.fields.len());
        assert!(record.values.iter().all(|v| !v.contains("125")));
    }

    #[test]
    fn count_beyond_declared_length_stops_decoding() {
        let data = RecordBuilder::new(5, [18, 40, 18, 20], 200)
            .put(13, "0002")
            .build();
        let header = read_header(&data).unwrap();
        let mut ctx = DecodingContext::default();
        let value = decode(&data, &header, &mut ctx).unwrap();
        let record = value.record();
        assert_eq!(35, record.fields.len());
        assert_eq!(None, value.decoded_length());
        let first_skipped = record
            .statuses
            .iter()
            .position(|s| *s == FieldStatus::NotReached)
            .unwrap();
        assert!(record.fields[first_skipped].end > 200);
        assert!(record.fields[first_skipped - 1].end <= 200);
    }

    #[test]
    fn filler_count_means_no_points() {
        let data = RecordBuilder::new(5, [18, 40, 18, 20], 16).build();
        let header = read_header(&data).unwrap();
        let value = decode(&data, &header, &mut DecodingContext::default()).unwrap();
        assert_eq!(Some(0), value.repeat_count());
        assert_eq!(7, value.record().fields.len());
    }
}
