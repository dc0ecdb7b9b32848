use super::*;
use field::{ascii, exp, field, int};

pub const DATA_QUALITY_LENGTH: usize = 1620;
const CHANNELS: usize = 16;

const NOMINAL_FIELDS: [FieldSpec; 16] = [
    field(13, 16, int(4), "-", "Data quality summary record sequence number"),
    field(17, 20, ascii(4), "-", "SAR channel indicator"),
    field(21, 26, ascii(6), "YYMMDD", "Date of the last calibration update"),
    field(27, 30, int(4), "-", "Number of channels"),
    field(31, 46, exp(16, 7), "dB", "Integrated side lobe ratio"),
    field(47, 62, exp(16, 7), "dB", "Peak side lobe ratio"),
    field(63, 78, exp(16, 7), "dB", "Azimuth ambiguity"),
    field(79, 94, exp(16, 7), "dB", "Range ambiguity"),
    field(95, 110, exp(16, 7), "dB", "Estimate of SNR"),
    field(111, 126, exp(16, 7), "-", "Actual bit error rate"),
    field(127, 142, exp(16, 7), "m", "Slant range resolution"),
    field(143, 158, exp(16, 7), "m", "Azimuth resolution"),
    field(159, 174, exp(16, 7), "dB", "Radiometric resolution"),
    field(175, 190, exp(16, 7), "dB", "Instantaneous dynamic range"),
    field(191, 206, exp(16, 7), "dB", "Nominal absolute radiometric calibration magnitude uncertainty"),
    field(207, 222, exp(16, 7), "deg", "Nominal absolute radiometric calibration phase uncertainty"),
];

const RELATIVE_CALIBRATION: [FieldSpec; 2] = [
    field(1, 16, exp(16, 7), "dB", "Relative radiometric calibration magnitude uncertainty"),
    field(17, 32, exp(16, 7), "deg", "Relative radiometric calibration phase uncertainty"),
];

const GEOMETRIC_FIELDS: [FieldSpec; 6] = [
    field(735, 750, exp(16, 7), "m", "Absolute location error along track"),
    field(751, 766, exp(16, 7), "m", "Absolute location error cross track"),
    field(767, 782, exp(16, 7), "-", "Geometric distortion scale in line direction"),
    field(783, 798, exp(16, 7), "-", "Geometric distortion scale in pixel direction"),
    field(799, 814, exp(16, 7), "-", "Geometric distortion skew"),
    field(815, 830, exp(16, 7), "deg", "Scene orientation error"),
];

const RELATIVE_MISREGISTRATION: [FieldSpec; 2] = [
    field(1, 16, exp(16, 7), "m", "Relative misregistration error along track"),
    field(17, 32, exp(16, 7), "m", "Relative misregistration error cross track"),
];

const TRAILER: [FieldSpec; 1] = [field(1343, 1620, ascii(278), "-", "Spare")];

/// Per-channel values come as 16 fixed slots, filled or not.
pub fn table() -> TableBuilder {
    fixed_layout(&NOMINAL_FIELDS)
        .repeat("channel", 223, CHANNELS, &RELATIVE_CALIBRATION)
        .fields(&GEOMETRIC_FIELDS)
        .repeat("channel", 831, CHANNELS, &RELATIVE_MISREGISTRATION)
        .fields(&TRAILER)
}

pub fn decode(
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let record = decode_with_layout(RecordKind::DataQualitySummary, buffer, header, table(), ctx);
    Ok(RecordValue::DataQualitySummary(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ceos::{field::tests::assert_well_formed, header::read_header, tests::RecordBuilder};

    #[test]
    fn table_covers_nominal_length() {
        let table = table().build();
        assert_eq!(DATA_QUALITY_LENGTH, assert_well_formed(&table));
        assert_eq!(6 + 16 + 32 + 6 + 32 + 1, table.len());
    }

    #[test]
    fn decode_quality_figures() {
        let data = RecordBuilder::new(8, [18, 60, 18, 20], 1620)
            .put(21, "950312")
            .put(95, " 1.8500000E+01  ")
            .put(255, " 2.0000000E-01  ")
            .build();
        let header = read_header(&data).unwrap();
        let value = decode(&data, &header, &mut DecodingContext::default()).unwrap();
        let record = value.record();
        assert_eq!(
            Some("950312"),
            record.value_of("Date of the last calibration update")
        );
        assert_eq!(Some(" 1.8500000E+01  "), record.value_of("Estimate of SNR"));
        let magnitudes =
            record.values_of("Relative radiometric calibration magnitude uncertainty");
        assert_eq!(CHANNELS, magnitudes.len());
        assert_eq!(" 2.0000000E-01  ", magnitudes[1]);
        assert_eq!(Some(1620), value.decoded_length());
    }
}
