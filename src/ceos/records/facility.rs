//! Facility related data records.
//!
//! The general form carries processing quality flags and statistics. Revision B
//! products put a record sequence number in front, moving every later field by four
//! bytes. The PCS quality form shares the general form's codes and is told apart by
//! its length. Form #11 holds the polynomial coefficients for converting between
//! image and geographic coordinates.

use super::*;
use field::{ascii, exp, field, group_width, int};

pub const GENERAL_A_LENGTH: usize = 12288;
pub const GENERAL_B_LENGTH: usize = 5000;
pub const PCS_QUALITY_LENGTH: usize = dispatch::PCS_QUALITY_RECORD_LENGTH;
/// Bytes before the first coefficient group of form #11.
pub const FORM_11_FIXED_LENGTH: usize = 20;
/// The only facility related data sub-form with a known layout.
pub const SUPPORTED_FORM: i64 = 11;

/// Layout of the general form, as found in revision A records.
const GENERAL_FIELDS: [FieldSpec; 42] = [
    field(13, 76, ascii(64), "-", "Name of facility related data record"),
    field(77, 82, ascii(6), "YYMMDD", "Date of last release of QC software"),
    field(83, 84, ascii(2), "-", "Spare"),
    field(85, 90, ascii(6), "YYMMDD", "Date of last calibration update"),
    field(91, 94, int(4), "-", "Overall quality flag"),
    field(95, 98, int(4), "-", "PRF code change flag"),
    field(99, 102, int(4), "-", "Sampling window start time change flag"),
    field(103, 106, int(4), "-", "Calibration system gain change flag"),
    field(107, 110, int(4), "-", "Quality of replica flag"),
    field(111, 114, int(4), "-", "Input data statistics flag"),
    field(115, 118, int(4), "-", "Doppler centroid confidence measure flag"),
    field(119, 122, int(4), "-", "Doppler centroid value flag"),
    field(123, 126, int(4), "-", "Doppler ambiguity confidence measure flag"),
    field(127, 130, int(4), "-", "Output data mean flag"),
    field(131, 134, int(4), "-", "OGOB flag"),
    field(135, 140, int(6), "-", "Number of PRF code changes"),
    field(141, 146, int(6), "-", "Number of sampling window changes"),
    field(147, 152, int(6), "-", "Number of calibration subsystem gain changes"),
    field(153, 158, int(6), "-", "Number of missing lines"),
    field(159, 164, int(6), "-", "Number of receiver gain changes"),
    field(165, 180, exp(16, 7), "samples", "3 dB pulse width of first replica"),
    field(181, 196, exp(16, 7), "dB", "First side lobe level of first replica"),
    field(197, 212, exp(16, 7), "dB", "Integrated side lobe ratio of first replica"),
    field(213, 228, exp(16, 7), "-", "Input data mean of I channel"),
    field(229, 244, exp(16, 7), "-", "Input data mean of Q channel"),
    field(245, 260, exp(16, 7), "-", "Input data standard deviation of I channel"),
    field(261, 276, exp(16, 7), "-", "Input data standard deviation of Q channel"),
    field(277, 292, exp(16, 7), "dB", "Calibration system gain"),
    field(293, 308, exp(16, 7), "Hz", "Doppler centroid"),
    field(309, 324, exp(16, 7), "-", "Doppler ambiguity confidence measure"),
    field(325, 340, exp(16, 7), "-", "Output data mean of real part"),
    field(341, 356, exp(16, 7), "-", "Output data mean of imaginary part"),
    field(357, 372, exp(16, 7), "-", "Output data standard deviation of real part"),
    field(373, 388, exp(16, 7), "-", "Output data standard deviation of imaginary part"),
    field(389, 412, ascii(24), "-", "Time of first input range line"),
    field(413, 436, ascii(24), "-", "Time of last input range line"),
    field(437, 452, exp(16, 7), "km", "Slant range to first pixel"),
    field(453, 468, exp(16, 7), "km", "Slant range to last pixel"),
    field(469, 484, exp(16, 7), "Hz", "Doppler centroid at early edge"),
    field(485, 500, exp(16, 7), "Hz/s", "Azimuth FM rate"),
    field(501, 516, exp(16, 7), "deg", "Look angle at first pixel"),
    field(517, 532, exp(16, 7), "deg", "Look angle at last pixel"),
];

const REVISION_B_SEQUENCE: [FieldSpec; 1] =
    [field(13, 16, int(4), "-", "Facility record sequence number")];
const REVISION_B_SHIFT: usize = 4;

const PCS_QUALITY_FIELDS: [FieldSpec; 19] = [
    field(13, 16, int(4), "-", "Facility record sequence number"),
    field(17, 24, ascii(8), "-", "PCS software version"),
    field(25, 48, ascii(24), "-", "Processing start time"),
    field(49, 72, ascii(24), "-", "Processing stop time"),
    field(73, 88, exp(16, 7), "-", "Mean of I channel samples"),
    field(89, 104, exp(16, 7), "-", "Mean of Q channel samples"),
    field(105, 120, exp(16, 7), "-", "Standard deviation of I channel samples"),
    field(121, 136, exp(16, 7), "-", "Standard deviation of Q channel samples"),
    field(137, 152, exp(16, 7), "-", "I/Q gain imbalance"),
    field(153, 168, exp(16, 7), "deg", "I/Q quadrature departure"),
    field(169, 184, exp(16, 7), "dB", "Estimated noise level"),
    field(185, 200, exp(16, 7), "-", "Doppler centroid estimate confidence"),
    field(201, 216, exp(16, 7), "-", "Doppler ambiguity estimate confidence"),
    field(217, 232, exp(16, 7), "-", "Replica quality"),
    field(233, 240, int(8), "-", "Number of missing lines"),
    field(241, 248, int(8), "-", "Number of duplicated lines"),
    field(249, 256, int(8), "-", "Number of saturated samples"),
    field(257, 260, int(4), "-", "Overall quality flag"),
    field(261, 1620, ascii(1360), "-", "Spare"),
];

const FORM_ID: FieldSpec = field(13, 16, int(4), "-", "Facility related data record form");
const COEFFICIENT_COUNT: FieldSpec = field(17, 20, int(4), "-", "Number of polynomial coefficients");

const COEFFICIENT_FIELDS: [FieldSpec; 4] = [
    field(1, 20, exp(20, 10), "-", "Pixel/line to latitude coefficient"),
    field(21, 40, exp(20, 10), "-", "Pixel/line to longitude coefficient"),
    field(41, 60, exp(20, 10), "-", "Latitude/longitude to pixel coefficient"),
    field(61, 80, exp(20, 10), "-", "Latitude/longitude to line coefficient"),
];

/// Follows the last coefficient group, relative to its end.
const ORIGIN_FIELDS: [FieldSpec; 4] = [
    field(1, 20, exp(20, 10), "-", "Origin pixel"),
    field(21, 40, exp(20, 10), "-", "Origin line"),
    field(41, 60, exp(20, 10), "deg", "Origin latitude"),
    field(61, 80, exp(20, 10), "deg", "Origin longitude"),
];

pub fn general_table(revision: Revision) -> TableBuilder {
    match revision {
        Revision::A => fixed_layout(&GENERAL_FIELDS).pad_to(GENERAL_A_LENGTH),
        Revision::B => fixed_layout(&REVISION_B_SEQUENCE)
            .shifted(REVISION_B_SHIFT, &GENERAL_FIELDS)
            .pad_to(GENERAL_B_LENGTH),
    }
}

pub fn pcs_quality_table() -> TableBuilder {
    fixed_layout(&PCS_QUALITY_FIELDS)
}

/// The number of coefficient groups a form #11 record announces.
pub fn peek_count(buffer: &[u8]) -> usize {
    decoder::peek_count(buffer, &COEFFICIENT_COUNT)
}

pub fn build_table_11(count: usize) -> TableBuilder {
    let coefficients_end = FORM_11_FIXED_LENGTH + count * group_width(&COEFFICIENT_FIELDS);
    fixed_layout(&[FORM_ID, COEFFICIENT_COUNT])
        .repeat("coefficient", FORM_11_FIXED_LENGTH + 1, count, &COEFFICIENT_FIELDS)
        .shifted(coefficients_end, &ORIGIN_FIELDS)
}

pub fn decode_general(
    revision: Revision,
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let kind = RecordKind::FacilityRelatedGeneral(revision);
    let record = decode_with_layout(kind, buffer, header, general_table(revision), ctx);
    Ok(RecordValue::FacilityRelatedGeneral { revision, record })
}

pub fn decode_pcs_quality(
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let kind = RecordKind::FacilityRelatedPcsQuality;
    let record = decode_with_layout(kind, buffer, header, pcs_quality_table(), ctx);
    Ok(RecordValue::FacilityRelatedPcsQuality(record))
}

/// Decode form #11. Any other form number fails with [CeosError::UnsupportedSubvariant].
pub fn decode_11(
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let kind = RecordKind::FacilityRelated11;
    let form = decoder::decode_spec(buffer, &FORM_ID)
        .into_string()
        .trim()
        .to_string();
    if form.parse::<i64>().ok() != Some(SUPPORTED_FORM) {
        ctx.report(DiagnosticKind::UnsupportedSubvariant {
            kind,
            id: form.clone(),
        });
        return UnsupportedSubvariantSnafu { kind, id: form }.fail();
    }
    let coefficients = peek_count(buffer);
    let record = decode_with_layout(kind, buffer, header, build_table_11(coefficients), ctx);
    Ok(RecordValue::FacilityRelated11 {
        coefficients,
        record,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ceos::{field::tests::assert_well_formed, header::read_header, tests::RecordBuilder};

    #[test]
    fn tables_cover_nominal_length() {
        assert_eq!(
            GENERAL_A_LENGTH,
            assert_well_formed(&general_table(Revision::A).build())
        );
        assert_eq!(
            GENERAL_B_LENGTH,
            assert_well_formed(&general_table(Revision::B).build())
        );
        assert_eq!(
            PCS_QUALITY_LENGTH,
            assert_well_formed(&pcs_quality_table().build())
        );
    }

    #[test]
    fn revision_b_shifts_general_fields() {
        let overall_quality = |revision| {
            general_table(revision)
                .build()
                .into_iter()
                .find(|f| f.description == "Overall quality flag")
                .map(|f| f.byte_range())
        };
        assert_eq!(Some((91, 94)), overall_quality(Revision::A));
        assert_eq!(Some((95, 98)), overall_quality(Revision::B));
    }

    #[test]
    fn form_11_table() {
        for count in [0, 1, 10] {
            let table = build_table_11(count).build();
            assert_eq!(6 + 2 + 4 * count + 4, table.len());
            assert_eq!(
                FORM_11_FIXED_LENGTH + 80 * count + 80,
                assert_well_formed(&table)
            );
        }
    }

    #[test]
    fn decode_general_revision_b() {
        let data = RecordBuilder::new(10, [10, 200, 31, 50], 5000)
            .put(13, "   1")
            .put(95, "   0")
            .build();
        let header = read_header(&data).unwrap();
        let mut ctx = DecodingContext::default();
        let value = decode_general(Revision::B, &data, &header, &mut ctx).unwrap();
        let record = value.record();
        assert_eq!(Some("   1"), record.value_of("Facility record sequence number"));
        assert_eq!(Some("   0"), record.value_of("Overall quality flag"));
        assert_eq!(Some(5000), value.decoded_length());
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn decode_pcs_quality_record() {
        let data = RecordBuilder::new(11, [18, 200, 18, 50], 1620)
            .put(17, "VMP 6.8 ")
            .put(233, "      12")
            .build();
        let header = read_header(&data).unwrap();
        let value = decode_pcs_quality(&data, &header, &mut DecodingContext::default()).unwrap();
        assert_eq!(RecordKind::FacilityRelatedPcsQuality, value.kind());
        let record = value.record();
        assert_eq!(Some("VMP 6.8 "), record.value_of("PCS software version"));
        assert_eq!(Some("      12"), record.value_of("Number of missing lines"));
    }

    #[test]
    fn decode_form_11() {
        let length = (FORM_11_FIXED_LENGTH + 2 * 80 + 80) as u32;
        let data = RecordBuilder::new(12, [18, 200, 18, 70], length)
            .put(13, "  11")
            .put(17, "   2")
            .put(21, " 4.5123456789E+01   ")
            .put(201, " 1.0240000000E+03   ")
            .build();
        let header = read_header(&data).unwrap();
        let mut ctx = DecodingContext::default();
        let value = decode_11(&data, &header, &mut ctx).unwrap();
        assert_eq!(Some(2), value.repeat_count());
        let record = value.record();
        assert_eq!(
            vec![" 4.5123456789E+01   ", ""],
            record.values_of("Pixel/line to latitude coefficient")
        );
        assert_eq!(Some(" 1.0240000000E+03   "), record.value_of("Origin pixel"));
        assert_eq!(Some(260), value.decoded_length());
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn other_forms_are_unsupported() {
        for form in ["  12", "   3", "    "] {
            let data = RecordBuilder::new(12, [18, 200, 18, 70], 500)
                .put(13, form)
                .build();
            let header = read_header(&data).unwrap();
            let mut ctx = DecodingContext::at_offset(4000);
            match decode_11(&data, &header, &mut ctx) {
                Err(CeosError::UnsupportedSubvariant { kind, id, .. }) => {
                    assert_eq!(RecordKind::FacilityRelated11, kind);
                    assert_eq!(form.trim(), id);
                }
                other => panic!("Expected UnsupportedSubvariant, got {other:?}"),
            }
            assert_eq!(1, ctx.diagnostics().len());
            assert_eq!(log::Level::Warn, ctx.diagnostics()[0].level());
        }
    }
}
