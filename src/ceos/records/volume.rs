//! Records of the volume directory file.

use super::*;
use field::{ascii, field, int};

pub const VOLUME_DESCRIPTOR_LENGTH: usize = 360;
pub const FILE_POINTER_LENGTH: usize = 360;
pub const TEXT_LENGTH: usize = 360;

const VOLUME_DESCRIPTOR_FIELDS: [FieldSpec; 26] = [
    field(13, 14, ascii(2), "-", "ASCII/EBCDIC flag"),
    field(15, 16, ascii(2), "-", "Blanks"),
    field(17, 28, ascii(12), "-", "Superstructure format control document ID"),
    field(29, 30, ascii(2), "-", "Superstructure format control document revision level"),
    field(31, 32, ascii(2), "-", "Superstructure record format revision level"),
    field(33, 44, ascii(12), "-", "Logical volume generating software release and revision level"),
    field(45, 60, ascii(16), "-", "Physical volume ID"),
    field(61, 76, ascii(16), "-", "Logical volume ID"),
    field(77, 92, ascii(16), "-", "Volume set ID"),
    field(93, 94, int(2), "-", "Total number of physical volumes in the logical volume"),
    field(95, 96, int(2), "-", "Physical volume sequence number of the first tape"),
    field(97, 98, int(2), "-", "Physical volume sequence number of the last tape"),
    field(99, 100, int(2), "-", "Physical volume sequence number of the current tape"),
    field(101, 104, int(4), "-", "First referenced file number in this physical volume"),
    field(105, 108, int(4), "-", "Logical volume within a volume set"),
    field(109, 112, int(4), "-", "Logical volume number within physical volume"),
    field(113, 120, ascii(8), "YYYYMMDD", "Logical volume creation date"),
    field(121, 128, ascii(8), "HHMMSSXX", "Logical volume creation time"),
    field(129, 140, ascii(12), "-", "Logical volume generation country"),
    field(141, 148, ascii(8), "-", "Logical volume generating agency"),
    field(149, 160, ascii(12), "-", "Logical volume generating facility"),
    field(161, 164, int(4), "-", "Number of file pointer records in volume directory"),
    field(165, 168, int(4), "-", "Number of records in volume directory"),
    field(169, 180, ascii(12), "-", "Logical volume ID of the product"),
    field(181, 260, ascii(80), "-", "Spare"),
    field(261, 360, ascii(100), "-", "Local use segment"),
];

const FILE_POINTER_FIELDS: [FieldSpec; 19] = [
    field(13, 14, ascii(2), "-", "ASCII/EBCDIC flag"),
    field(15, 16, ascii(2), "-", "Blanks"),
    field(17, 20, int(4), "-", "Referenced file number"),
    field(21, 36, ascii(16), "-", "Referenced file name"),
    field(37, 64, ascii(28), "-", "Referenced file class"),
    field(65, 68, ascii(4), "-", "Referenced file class code"),
    field(69, 96, ascii(28), "-", "Referenced file data type"),
    field(97, 100, ascii(4), "-", "Referenced file data type code"),
    field(101, 108, int(8), "-", "Number of records in referenced file"),
    field(109, 116, int(8), "bytes", "Referenced file first record length"),
    field(117, 124, int(8), "bytes", "Referenced file maximum record length"),
    field(125, 136, ascii(12), "-", "Referenced file record length type"),
    field(137, 140, ascii(4), "-", "Referenced file record length type code"),
    field(141, 142, int(2), "-", "Referenced file physical volume start number"),
    field(143, 144, int(2), "-", "Referenced file physical volume end number"),
    field(145, 152, int(8), "-", "Referenced file portion start record number"),
    field(153, 160, int(8), "-", "Referenced file portion end record number"),
    field(161, 260, ascii(100), "-", "Spare"),
    field(261, 360, ascii(100), "-", "Local use segment"),
];

const TEXT_FIELDS: [FieldSpec; 8] = [
    field(13, 14, ascii(2), "-", "ASCII/EBCDIC flag"),
    field(15, 16, ascii(2), "-", "Continuation flag"),
    field(17, 56, ascii(40), "-", "Product type specifier"),
    field(57, 116, ascii(60), "-", "Location and date/time of product creation"),
    field(117, 156, ascii(40), "-", "Physical volume identification"),
    field(157, 196, ascii(40), "-", "Scene identification"),
    field(197, 236, ascii(40), "-", "Scene location"),
    field(237, 360, ascii(124), "-", "Spare"),
];

pub fn volume_descriptor_table() -> TableBuilder {
    fixed_layout(&VOLUME_DESCRIPTOR_FIELDS)
}

pub fn file_pointer_table() -> TableBuilder {
    fixed_layout(&FILE_POINTER_FIELDS)
}

pub fn text_table() -> TableBuilder {
    fixed_layout(&TEXT_FIELDS)
}

pub fn decode_volume_descriptor(
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let kind = RecordKind::VolumeDescriptor;
    let record = decode_with_layout(kind, buffer, header, volume_descriptor_table(), ctx);
    Ok(RecordValue::VolumeDescriptor(record))
}

pub fn decode_file_pointer(
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let kind = RecordKind::FilePointer;
    let record = decode_with_layout(kind, buffer, header, file_pointer_table(), ctx);
    Ok(RecordValue::FilePointer(record))
}

pub fn decode_text(
    buffer: &[u8],
    header: &RecordHeader,
    ctx: &mut DecodingContext,
) -> Result<RecordValue> {
    let record = decode_with_layout(RecordKind::Text, buffer, header, text_table(), ctx);
    Ok(RecordValue::Text(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ceos::{field::tests::assert_well_formed, header::read_header, tests::RecordBuilder};

    #[test]
    fn tables_cover_nominal_length() {
        assert_eq!(
            VOLUME_DESCRIPTOR_LENGTH,
            assert_well_formed(&volume_descriptor_table().build())
        );
        assert_eq!(
            FILE_POINTER_LENGTH,
            assert_well_formed(&file_pointer_table().build())
        );
        assert_eq!(TEXT_LENGTH, assert_well_formed(&text_table().build()));
    }

    #[test]
    fn decode_volume_descriptor_record() {
        let data = RecordBuilder::new(1, [192, 192, 18, 18], 360)
            .put(13, "A")
            .put(17, "CEOS-SAR-CCT")
            .put(45, "ERS-1-SAR-PRI")
            .put(113, "19950312")
            .put(161, "   2")
            .build();
        let header = read_header(&data).unwrap();
        let mut ctx = DecodingContext::default();
        let value = decode_volume_descriptor(&data, &header, &mut ctx).unwrap();
        let record = value.record();
        assert_eq!(Some("A "), record.value_of("ASCII/EBCDIC flag"));
        assert_eq!(
            Some("CEOS-SAR-CCT"),
            record.value_of("Superstructure format control document ID")
        );
        assert_eq!(
            Some("ERS-1-SAR-PRI   "),
            record.value_of("Physical volume ID")
        );
        assert_eq!(
            Some("19950312"),
            record.value_of("Logical volume creation date")
        );
        assert_eq!(
            Some("   2"),
            record.value_of("Number of file pointer records in volume directory")
        );
        assert_eq!(Some(""), record.value_of("Volume set ID"));
        assert_eq!(Some(360), value.decoded_length());
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn decode_file_pointer_record() {
        let data = RecordBuilder::new(2, [219, 192, 18, 18], 360)
            .put(17, "   1")
            .put(21, "SARLEADER")
            .put(101, "      11")
            .build();
        let header = read_header(&data).unwrap();
        let value = decode_file_pointer(&data, &header, &mut DecodingContext::default()).unwrap();
        let record = value.record();
        assert_eq!(Some("   1"), record.value_of("Referenced file number"));
        assert_eq!(Some("SARLEADER       "), record.value_of("Referenced file name"));
        assert_eq!(
            Some("      11"),
            record.value_of("Number of records in referenced file")
        );
    }

    #[test]
    fn decode_text_record() {
        let data = RecordBuilder::new(3, [18, 63, 18, 18], 360)
            .put(17, "PRODUCT:PRI")
            .build();
        let header = read_header(&data).unwrap();
        let value = decode_text(&data, &header, &mut DecodingContext::default()).unwrap();
        assert_eq!(RecordKind::Text, value.kind());
        assert_eq!(
            "PRODUCT:PRI",
            value
                .record()
                .value_of("Product type specifier")
                .unwrap()
                .trim_end()
        );
    }
}
