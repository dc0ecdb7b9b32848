use super::*;
use decoder::peek_count;
use field::{ascii, field, int};

pub const FILE_DESCRIPTOR_LENGTH: usize = 720;

const LOW_RESOLUTION_RECORD_COUNT: FieldSpec = field(
    433,
    438,
    int(6),
    "-",
    "Number of low resolution image records",
);
const LOW_RESOLUTION_RECORD_LENGTH: FieldSpec = field(
    439,
    444,
    int(6),
    "bytes",
    "Low resolution image record length",
);

const FILE_DESCRIPTOR_FIELDS: [FieldSpec; 65] = [
    field(13, 14, ascii(2), "-", "ASCII/EBCDIC flag"),
    field(15, 16, ascii(2), "-", "Blanks"),
    field(17, 28, ascii(12), "-", "Format control document ID"),
    field(29, 30, ascii(2), "-", "Format control document revision level"),
    field(31, 32, ascii(2), "-", "File design descriptor revision letter"),
    field(33, 44, ascii(12), "-", "Generating software release and revision level"),
    field(45, 48, int(4), "-", "File number"),
    field(49, 64, ascii(16), "-", "File name"),
    field(65, 68, ascii(4), "-", "Record sequence and location type flag"),
    field(69, 76, int(8), "-", "Sequence number location"),
    field(77, 80, int(4), "bytes", "Sequence number field length"),
    field(81, 84, ascii(4), "-", "Record code and location type flag"),
    field(85, 92, int(8), "-", "Record code location"),
    field(93, 96, int(4), "bytes", "Record code field length"),
    field(97, 100, ascii(4), "-", "Record length and location type flag"),
    field(101, 108, int(8), "-", "Record length location"),
    field(109, 112, int(4), "bytes", "Record length field length"),
    field(113, 113, ascii(1), "-", "Reserved"),
    field(114, 114, ascii(1), "-", "Reserved"),
    field(115, 115, ascii(1), "-", "Reserved"),
    field(116, 116, ascii(1), "-", "Reserved"),
    field(117, 180, ascii(64), "-", "Reserved segment"),
    field(181, 186, int(6), "-", "Number of data set summary records"),
    field(187, 192, int(6), "bytes", "Data set summary record length"),
    field(193, 198, int(6), "-", "Number of map projection data records"),
    field(199, 204, int(6), "bytes", "Map projection data record length"),
    field(205, 210, int(6), "-", "Number of platform position data records"),
    field(211, 216, int(6), "bytes", "Platform position data record length"),
    field(217, 222, int(6), "-", "Number of attitude data records"),
    field(223, 228, int(6), "bytes", "Attitude data record length"),
    field(229, 234, int(6), "-", "Number of radiometric data records"),
    field(235, 240, int(6), "bytes", "Radiometric data record length"),
    field(241, 246, int(6), "-", "Number of radiometric compensation records"),
    field(247, 252, int(6), "bytes", "Radiometric compensation record length"),
    field(253, 258, int(6), "-", "Number of data quality summary records"),
    field(259, 264, int(6), "bytes", "Data quality summary record length"),
    field(265, 270, int(6), "-", "Number of data histogram records"),
    field(271, 276, int(6), "bytes", "Data histogram record length"),
    field(277, 282, int(6), "-", "Number of range spectra records"),
    field(283, 288, int(6), "bytes", "Range spectra record length"),
    field(289, 294, int(6), "-", "Number of DEM descriptor records"),
    field(295, 300, int(6), "bytes", "DEM descriptor record length"),
    field(301, 306, int(6), "-", "Number of radar parameter update records"),
    field(307, 312, int(6), "bytes", "Radar parameter update record length"),
    field(313, 318, int(6), "-", "Number of annotation data records"),
    field(319, 324, int(6), "bytes", "Annotation data record length"),
    field(325, 330, int(6), "-", "Number of detailed processing records"),
    field(331, 336, int(6), "bytes", "Detailed processing record length"),
    field(337, 342, int(6), "-", "Number of calibration records"),
    field(343, 348, int(6), "bytes", "Calibration record length"),
    field(349, 354, int(6), "-", "Number of ground control point records"),
    field(355, 360, int(6), "bytes", "Ground control point record length"),
    field(361, 420, ascii(60), "-", "Spare"),
    field(421, 426, int(6), "-", "Number of facility related data records"),
    field(427, 432, int(6), "bytes", "Facility related data record length"),
    LOW_RESOLUTION_RECORD_COUNT,
    LOW_RESOLUTION_RECORD_LENGTH,
    field(445, 450, int(6), "-", "Number of pixels of low resolution image"),
    field(451, 456, int(6), "-", "Number of lines of low resolution image"),
    field(457, 462, int(6), "bytes", "Number of bytes per pixel of low resolution image"),
    field(463, 466, ascii(4), "-", "Spare"),
    field(467, 470, ascii(4), "-", "Spare"),
    field(471, 474, ascii(4), "-", "Spare"),
    field(475, 478, ascii(4), "-", "Spare"),
    field(479, 720, ascii(242), "-", "Spare"),
];

pub fn table() -> TableBuilder {
    fixed_layout(&FILE_DESCRIPTOR_FIELDS)
}

/// Bytes of low resolution image data that follow the record: record count × record length.
pub fn low_resolution_bytes(buffer: &[u8]) -> usize {
    let count = peek_count(buffer, &LOW_RESOLUTION_RECORD_COUNT);
    let length = peek_count(buffer, &LOW_RESOLUTION_RECORD_LENGTH);
    count.saturating_mul(length)
}

pub fn decode(
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let record = decode_with_layout(RecordKind::FileDescriptor, buffer, header, table(), ctx);
    let low_resolution_bytes = low_resolution_bytes(buffer);
    if low_resolution_bytes > 0 {
        log::debug!(
            "offset {}: {low_resolution_bytes} bytes of low resolution image follow the file descriptor",
            ctx.offset()
        );
    }
    Ok(RecordValue::FileDescriptor {
        low_resolution_bytes,
        record,
    })
}
