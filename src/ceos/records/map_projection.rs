use super::*;
use field::{ascii, exp, field, fixed, int};

pub const MAP_PROJECTION_LENGTH: usize = 1620;

const PROJECTION_FIELDS: [FieldSpec; 70] = [
    field(13, 28, ascii(16), "-", "Spare"),
    field(29, 60, ascii(32), "-", "Map projection descriptor"),
    field(61, 76, int(16), "-", "Number of pixels per line of image"),
    field(77, 92, int(16), "-", "Number of lines in image"),
    field(93, 108, fixed(16, 7), "m", "Nominal inter-pixel distance in output scene"),
    field(109, 124, fixed(16, 7), "m", "Nominal inter-line distance in output scene"),
    field(125, 140, fixed(16, 7), "deg", "Orientation at output scene centre"),
    field(141, 156, fixed(16, 7), "deg", "Actual platform orbital inclination"),
    field(157, 172, fixed(16, 7), "deg", "Actual ascending node"),
    field(173, 188, fixed(16, 7), "m", "Distance of platform at input scene centre from geocentre"),
    field(189, 204, fixed(16, 7), "m", "Geodetic altitude of the platform relative to the ellipsoid"),
    field(205, 220, fixed(16, 7), "m/s", "Actual ground speed at nadir"),
    field(221, 236, fixed(16, 7), "deg", "Platform heading"),
    field(237, 268, ascii(32), "-", "Name of reference ellipsoid"),
    field(269, 284, fixed(16, 7), "m", "Semimajor axis of reference ellipsoid"),
    field(285, 300, fixed(16, 7), "m", "Semiminor axis of reference ellipsoid"),
    field(301, 316, fixed(16, 7), "m", "Datum shift parameter dx"),
    field(317, 332, fixed(16, 7), "m", "Datum shift parameter dy"),
    field(333, 348, fixed(16, 7), "m", "Datum shift parameter dz"),
    field(349, 364, fixed(16, 7), "deg", "Datum shift rotation about x"),
    field(365, 380, fixed(16, 7), "deg", "Datum shift rotation about y"),
    field(381, 396, fixed(16, 7), "deg", "Datum shift rotation about z"),
    field(397, 412, fixed(16, 7), "-", "Scale factor of reference ellipsoid"),
    field(413, 444, ascii(32), "-", "Alphanumeric description of map projection"),
    field(445, 476, ascii(32), "-", "UTM descriptor"),
    field(477, 480, ascii(4), "-", "Signature of the UTM zone"),
    field(481, 496, fixed(16, 7), "m", "UTM map origin false easting"),
    field(497, 512, fixed(16, 7), "m", "UTM map origin false northing"),
    field(513, 528, fixed(16, 7), "deg", "UTM projection centre longitude"),
    field(529, 544, fixed(16, 7), "deg", "UTM projection centre latitude"),
    field(545, 560, fixed(16, 7), "deg", "UTM first standard parallel"),
    field(561, 576, fixed(16, 7), "deg", "UTM second standard parallel"),
    field(577, 592, fixed(16, 7), "-", "UTM scale factor"),
    field(593, 624, ascii(32), "-", "UPS descriptor"),
    field(625, 640, fixed(16, 7), "deg", "UPS projection centre longitude"),
    field(641, 656, fixed(16, 7), "deg", "UPS projection centre latitude"),
    field(657, 672, fixed(16, 7), "-", "UPS scale factor"),
    field(673, 704, ascii(32), "-", "National system descriptor"),
    field(705, 720, fixed(16, 7), "m", "National map origin false easting"),
    field(721, 736, fixed(16, 7), "m", "National map origin false northing"),
    field(737, 752, fixed(16, 7), "deg", "National projection centre longitude"),
    field(753, 768, fixed(16, 7), "deg", "National projection centre latitude"),
    field(769, 784, fixed(16, 7), "deg", "National first standard parallel"),
    field(785, 800, fixed(16, 7), "deg", "National second standard parallel"),
    field(801, 816, fixed(16, 7), "deg", "National third standard parallel"),
    field(817, 832, fixed(16, 7), "deg", "National fourth standard parallel"),
    field(833, 848, fixed(16, 7), "deg", "National first central meridian"),
    field(849, 864, fixed(16, 7), "deg", "National second central meridian"),
    field(865, 880, fixed(16, 7), "deg", "National third central meridian"),
    field(881, 896, ascii(16), "-", "Spare"),
    field(897, 912, fixed(16, 7), "m", "Top left corner northing"),
    field(913, 928, fixed(16, 7), "m", "Top left corner easting"),
    field(929, 944, fixed(16, 7), "m", "Top right corner northing"),
    field(945, 960, fixed(16, 7), "m", "Top right corner easting"),
    field(961, 976, fixed(16, 7), "m", "Bottom right corner northing"),
    field(977, 992, fixed(16, 7), "m", "Bottom right corner easting"),
    field(993, 1008, fixed(16, 7), "m", "Bottom left corner northing"),
    field(1009, 1024, fixed(16, 7), "m", "Bottom left corner easting"),
    field(1025, 1040, fixed(16, 7), "deg", "Top left corner latitude"),
    field(1041, 1056, fixed(16, 7), "deg", "Top left corner longitude"),
    field(1057, 1072, fixed(16, 7), "deg", "Top right corner latitude"),
    field(1073, 1088, fixed(16, 7), "deg", "Top right corner longitude"),
    field(1089, 1104, fixed(16, 7), "deg", "Bottom right corner latitude"),
    field(1105, 1120, fixed(16, 7), "deg", "Bottom right corner longitude"),
    field(1121, 1136, fixed(16, 7), "deg", "Bottom left corner latitude"),
    field(1137, 1152, fixed(16, 7), "deg", "Bottom left corner longitude"),
    field(1153, 1168, fixed(16, 7), "m", "Top left corner terrain height"),
    field(1169, 1184, fixed(16, 7), "m", "Top right corner terrain height"),
    field(1185, 1200, fixed(16, 7), "m", "Bottom right corner terrain height"),
    field(1201, 1216, fixed(16, 7), "m", "Bottom left corner terrain height"),
];

const LINE_PIXEL_TO_MAP: [FieldSpec; 1] = [field(
    1,
    20,
    exp(20, 10),
    "-",
    "Line/pixel to map projection coefficient",
)];
const MAP_TO_LINE_PIXEL: [FieldSpec; 1] = [field(
    1,
    20,
    exp(20, 10),
    "-",
    "Map projection to line/pixel coefficient",
)];
const COEFFICIENTS: usize = 8;

const TRAILER: [FieldSpec; 1] = [field(1537, 1620, ascii(84), "-", "Spare")];

/// Both revisions share one layout.
pub fn table() -> TableBuilder {
    fixed_layout(&PROJECTION_FIELDS)
        .repeat("coefficient", 1217, COEFFICIENTS, &LINE_PIXEL_TO_MAP)
        .repeat("coefficient", 1377, COEFFICIENTS, &MAP_TO_LINE_PIXEL)
        .fields(&TRAILER)
}

pub fn decode(
    revision: Revision,
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let kind = RecordKind::MapProjection(revision);
    let record = decode_with_layout(kind, buffer, header, table(), ctx);
    Ok(RecordValue::MapProjection { revision, record })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ceos::{field::tests::assert_well_formed, header::read_header, tests::RecordBuilder};

    #[test]
    fn table_covers_nominal_length() {
        let table = table().build();
        assert_eq!(MAP_PROJECTION_LENGTH, assert_well_formed(&table));
        assert_eq!(6 + 70 + 16 + 1, table.len());
    }

    #[test]
    fn decode_corners_and_coefficients() {
        let data = RecordBuilder::new(3, [10, 20, 31, 20], 1620)
            .put(29, "UTM-PROJECTION")
            .put(1025, "      35.1234567")
            .put(1237, "-1.2345678900E+02")
            .build();
        let header = read_header(&data).unwrap();
        let value = decode(Revision::B, &data, &header, &mut DecodingContext::default()).unwrap();
        let record = value.record();
        assert_eq!(
            "UTM-PROJECTION",
            record.value_of("Map projection descriptor").unwrap().trim_end()
        );
        assert_eq!(
            Some("      35.1234567"),
            record.value_of("Top left corner latitude")
        );
        let coefficients = record.values_of("Line/pixel to map projection coefficient");
        assert_eq!(COEFFICIENTS, coefficients.len());
        assert_eq!("-1.2345678900E+02   ", coefficients[1]);
        assert_eq!("", coefficients[0]);
        let second = record
            .fields
            .iter()
            .find(|f| f.label() == "Line/pixel to map projection coefficient [coefficient 2]");
        assert_eq!(Some((1237, 1256)), second.map(|f| f.byte_range()));
    }
}
