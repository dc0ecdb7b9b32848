//! Data set summary record.
//!
//! Revision A products carry a 16 byte scene identifier, revision B products a 32
//! byte one followed by a scene reference number. From byte 101 on both share the
//! same scene, sensor and processing parameters. Revision B then appends
//! calibration and line loss information and pads to a longer record.

use super::*;
use field::{ascii, exp, field, fixed, int};

pub const REVISION_A_LENGTH: usize = 1886;
pub const REVISION_B_LENGTH: usize = 4096;

const REVISION_A_PREFIX: [FieldSpec; 5] = [
    field(13, 16, int(4), "-", "Data set summary record sequence number"),
    field(17, 20, int(4), "-", "SAR channel indicator"),
    field(21, 36, ascii(16), "-", "Scene identifier"),
    field(37, 68, ascii(32), "-", "Scene designator"),
    field(69, 100, ascii(32), "-", "Input scene centre time"),
];

const REVISION_B_PREFIX: [FieldSpec; 5] = [
    field(13, 16, int(4), "-", "Data set summary record sequence number"),
    field(17, 20, int(4), "-", "SAR channel indicator"),
    field(21, 52, ascii(32), "-", "Scene identifier"),
    field(53, 68, ascii(16), "-", "Number of scene reference"),
    field(69, 100, ascii(32), "-", "Input scene centre time"),
];

const COMMON_FIELDS: [FieldSpec; 110] = [
    field(101, 116, ascii(16), "-", "Spare"),
    field(117, 132, fixed(16, 7), "deg", "Processed scene centre geodetic latitude"),
    field(133, 148, fixed(16, 7), "deg", "Processed scene centre geodetic longitude"),
    field(149, 164, fixed(16, 7), "deg", "Processed scene centre true heading"),
    field(165, 180, ascii(16), "-", "Ellipsoid designator"),
    field(181, 196, fixed(16, 7), "km", "Ellipsoid semimajor axis"),
    field(197, 212, fixed(16, 7), "km", "Ellipsoid semiminor axis"),
    field(213, 228, fixed(16, 7), "10^24 kg", "Earth mass"),
    field(229, 244, fixed(16, 7), "m^3/s^2", "Gravitational constant"),
    field(245, 260, fixed(16, 7), "-", "Ellipsoid J2 parameter"),
    field(261, 276, fixed(16, 7), "-", "Ellipsoid J3 parameter"),
    field(277, 292, fixed(16, 7), "-", "Ellipsoid J4 parameter"),
    field(293, 308, ascii(16), "-", "Spare"),
    field(309, 324, fixed(16, 7), "m", "Average terrain height above ellipsoid at scene centre"),
    field(325, 332, int(8), "-", "Scene centre line number"),
    field(333, 340, int(8), "-", "Scene centre pixel number"),
    field(341, 356, fixed(16, 7), "km", "Processed scene length"),
    field(357, 372, fixed(16, 7), "km", "Processed scene width"),
    field(373, 388, ascii(16), "-", "Spare"),
    field(389, 392, int(4), "-", "Number of SAR channels"),
    field(393, 396, ascii(4), "-", "Spare"),
    field(397, 412, ascii(16), "-", "Sensor platform mission identifier"),
    field(413, 444, ascii(32), "-", "Sensor ID and mode of operation"),
    field(445, 452, ascii(8), "-", "Orbit number"),
    field(453, 460, fixed(8, 3), "deg", "Sensor platform geodetic latitude at nadir"),
    field(461, 468, fixed(8, 3), "deg", "Sensor platform geodetic longitude at nadir"),
    field(469, 476, fixed(8, 3), "deg", "Sensor platform heading at nadir"),
    field(477, 484, fixed(8, 3), "deg", "Sensor clock angle"),
    field(485, 492, fixed(8, 3), "deg", "Incidence angle at scene centre"),
    field(493, 500, fixed(8, 3), "GHz", "Radar frequency"),
    field(501, 516, fixed(16, 7), "m", "Radar wavelength"),
    field(517, 518, ascii(2), "-", "Motion compensation indicator"),
    field(519, 534, ascii(16), "-", "Range pulse code specifier"),
    field(535, 550, exp(16, 7), "Hz", "Range chirp amplitude coefficient 0"),
    field(551, 566, exp(16, 7), "Hz/s", "Range chirp amplitude coefficient 1"),
    field(567, 582, exp(16, 7), "Hz/s^2", "Range chirp amplitude coefficient 2"),
    field(583, 598, exp(16, 7), "Hz/s^3", "Range chirp amplitude coefficient 3"),
    field(599, 614, exp(16, 7), "Hz/s^4", "Range chirp amplitude coefficient 4"),
    field(615, 630, exp(16, 7), "cycles", "Range chirp phase coefficient 0"),
    field(631, 646, exp(16, 7), "Hz", "Range chirp phase coefficient 1"),
    field(647, 662, exp(16, 7), "Hz/s", "Range chirp phase coefficient 2"),
    field(663, 678, exp(16, 7), "Hz/s^2", "Range chirp phase coefficient 3"),
    field(679, 694, exp(16, 7), "Hz/s^3", "Range chirp phase coefficient 4"),
    field(695, 702, int(8), "-", "Down linked data chirp extraction index"),
    field(703, 710, ascii(8), "-", "Spare"),
    field(711, 726, fixed(16, 7), "MHz", "Range complex sampling rate"),
    field(727, 742, fixed(16, 7), "us", "Range gate delay at early edge"),
    field(743, 758, fixed(16, 7), "us", "Range pulse length"),
    field(759, 762, ascii(4), "-", "Base band conversion flag"),
    field(763, 766, ascii(4), "-", "Range compressed flag"),
    field(767, 782, fixed(16, 7), "dB", "Receiver gain for like polarized"),
    field(783, 798, fixed(16, 7), "dB", "Receiver gain for cross polarized"),
    field(799, 806, int(8), "bits", "Quantization in bits per channel"),
    field(807, 818, ascii(12), "-", "Quantizer descriptor"),
    field(819, 834, fixed(16, 7), "-", "DC bias for I-component"),
    field(835, 850, fixed(16, 7), "-", "DC bias for Q-component"),
    field(851, 866, fixed(16, 7), "-", "Gain imbalance for I and Q"),
    field(867, 882, ascii(16), "-", "Spare"),
    field(883, 898, ascii(16), "-", "Spare"),
    field(899, 914, fixed(16, 7), "deg", "Antenna mechanical boresight angle"),
    field(915, 918, ascii(4), "-", "Echo tracker on/off flag"),
    field(919, 934, fixed(16, 7), "Hz", "Nominal PRF"),
    field(935, 950, fixed(16, 7), "deg", "Antenna half power beam width in elevation"),
    field(951, 966, fixed(16, 7), "deg", "Antenna half power beam width in azimuth"),
    field(967, 982, ascii(16), "-", "Satellite encoded binary time code"),
    field(983, 1014, ascii(32), "-", "Satellite clock time"),
    field(1015, 1022, int(8), "ns", "Satellite clock increment"),
    field(1023, 1038, ascii(16), "-", "Processing facility identifier"),
    field(1039, 1046, ascii(8), "-", "Processing system identifier"),
    field(1047, 1054, ascii(8), "-", "Processing version identifier"),
    field(1055, 1070, ascii(16), "-", "Processing facility process code"),
    field(1071, 1086, ascii(16), "-", "Product level code"),
    field(1087, 1118, ascii(32), "-", "Product type specifier"),
    field(1119, 1150, ascii(32), "-", "Processing algorithm identifier"),
    field(1151, 1166, fixed(16, 7), "-", "Nominal effective number of looks in azimuth"),
    field(1167, 1182, fixed(16, 7), "-", "Nominal effective number of looks in range"),
    field(1183, 1198, fixed(16, 7), "Hz", "Bandwidth per look in azimuth"),
    field(1199, 1214, fixed(16, 7), "MHz", "Bandwidth per look in range"),
    field(1215, 1230, fixed(16, 7), "Hz", "Total processor bandwidth in azimuth"),
    field(1231, 1246, fixed(16, 7), "MHz", "Total processor bandwidth in range"),
    field(1247, 1278, ascii(32), "-", "Weighting function designator in azimuth"),
    field(1279, 1310, ascii(32), "-", "Weighting function designator in range"),
    field(1311, 1326, ascii(16), "-", "Data input source"),
    field(1327, 1342, fixed(16, 7), "m", "Nominal resolution in ground range"),
    field(1343, 1358, fixed(16, 7), "m", "Nominal resolution in azimuth"),
    field(1359, 1374, fixed(16, 7), "-", "Radiometric bias"),
    field(1375, 1390, fixed(16, 7), "-", "Radiometric gain"),
    field(1391, 1406, fixed(16, 7), "Hz", "Along track Doppler frequency centroid constant term"),
    field(1407, 1422, fixed(16, 7), "Hz/pixel", "Along track Doppler frequency centroid linear term"),
    field(1423, 1438, fixed(16, 7), "Hz/pixel^2", "Along track Doppler frequency centroid quadratic term"),
    field(1439, 1454, ascii(16), "-", "Spare"),
    field(1455, 1470, fixed(16, 7), "Hz", "Cross track Doppler frequency centroid constant term"),
    field(1471, 1486, fixed(16, 7), "Hz/pixel", "Cross track Doppler frequency centroid linear term"),
    field(1487, 1502, fixed(16, 7), "Hz/pixel^2", "Cross track Doppler frequency centroid quadratic term"),
    field(1503, 1510, ascii(8), "-", "Time direction indicator along pixel direction"),
    field(1511, 1518, ascii(8), "-", "Time direction indicator along line direction"),
    field(1519, 1534, fixed(16, 7), "Hz/s", "Along track Doppler frequency rate constant term"),
    field(1535, 1550, fixed(16, 7), "Hz/s/pixel", "Along track Doppler frequency rate linear term"),
    field(1551, 1566, fixed(16, 7), "Hz/s/pixel^2", "Along track Doppler frequency rate quadratic term"),
    field(1567, 1582, ascii(16), "-", "Spare"),
    field(1583, 1598, fixed(16, 7), "Hz/s", "Cross track Doppler frequency rate constant term"),
    field(1599, 1614, fixed(16, 7), "Hz/s/pixel", "Cross track Doppler frequency rate linear term"),
    field(1615, 1630, fixed(16, 7), "Hz/s/pixel^2", "Cross track Doppler frequency rate quadratic term"),
    field(1631, 1646, ascii(16), "-", "Spare"),
    field(1647, 1654, ascii(8), "-", "Line content indicator"),
    field(1655, 1658, ascii(4), "-", "Clutter lock applied flag"),
    field(1659, 1662, ascii(4), "-", "Autofocusing applied flag"),
    field(1663, 1678, fixed(16, 7), "m", "Line spacing"),
    field(1679, 1694, fixed(16, 7), "m", "Pixel spacing"),
    field(1695, 1710, ascii(16), "-", "Processor range compression designator"),
];

const REVISION_A_SUFFIX: [FieldSpec; 1] = [field(1711, 1886, ascii(176), "-", "Spare")];

const REVISION_B_SUFFIX: [FieldSpec; 12] = [
    field(1711, 1734, ascii(24), "-", "Spare"),
    field(1735, 1738, int(4), "-", "Calibration data indicator"),
    field(1739, 1746, int(8), "-", "Start line number of calibration at upper image"),
    field(1747, 1754, int(8), "-", "Stop line number of calibration at upper image"),
    field(1755, 1762, int(8), "-", "Start line number of calibration at bottom image"),
    field(1763, 1770, int(8), "-", "Stop line number of calibration at bottom image"),
    field(1771, 1774, int(4), "-", "PRF switching indicator"),
    field(1775, 1782, int(8), "-", "Line locator of PRF switching"),
    field(1783, 1798, ascii(16), "-", "Spare"),
    field(1799, 1806, int(8), "-", "Number of loss lines (level 1.0)"),
    field(1807, 1814, int(8), "-", "Number of loss lines (level 1.1, 1.5)"),
    field(1815, 4096, ascii(2282), "-", "Spare"),
];

pub fn table(revision: Revision) -> TableBuilder {
    let (prefix, suffix): (&[FieldSpec], &[FieldSpec]) = match revision {
        Revision::A => (&REVISION_A_PREFIX, &REVISION_A_SUFFIX),
        Revision::B => (&REVISION_B_PREFIX, &REVISION_B_SUFFIX),
    };
    fixed_layout(prefix).fields(&COMMON_FIELDS).fields(suffix)
}

pub fn decode(
    revision: Revision,
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let kind = RecordKind::DataSetSummary(revision);
    let record = decode_with_layout(kind, buffer, header, table(revision), ctx);
    Ok(RecordValue::DataSetSummary { revision, record })
}
