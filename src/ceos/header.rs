use super::*;
use bytes::Buf;
use field::{binary, field, FieldSpec};

/// Number of bytes in the prefix every record starts with.
pub const HEADER_LENGTH: usize = 12;

/// The six header fields at the top of every record table.
pub const HEADER_FIELDS: [FieldSpec; 6] = [
    field(1, 4, binary(4), "-", "Record sequence number"),
    field(5, 5, binary(1), "-", "1st record sub-type code"),
    field(6, 6, binary(1), "-", "Record type code"),
    field(7, 7, binary(1), "-", "2nd record sub-type code"),
    field(8, 8, binary(1), "-", "3rd record sub-type code"),
    field(9, 12, binary(4), "bytes", "Length of this record"),
];

/// The four code bytes at positions 5-8 that identify the kind of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordCodes(pub [u8; 4]);
impl fmt::Display for RecordCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a},{b},{c},{d}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordHeader {
    pub sequence_number: u32,
    pub first_subtype: u8,
    pub record_type: u8,
    pub second_subtype: u8,
    pub third_subtype: u8,
    /// Total record length in bytes, counted from the first header byte.
    pub length: u32,
}
impl RecordHeader {
    pub fn codes(&self) -> RecordCodes {
        RecordCodes([
            self.first_subtype,
            self.record_type,
            self.second_subtype,
            self.third_subtype,
        ])
    }

    pub fn declared_length(&self) -> usize {
        self.length as usize
    }
}
impl FromFixedLengthBytes for RecordHeader {
    const LENGTH: usize = HEADER_LENGTH;

    fn from_bytes_unchecked(mut data: &[u8]) -> Result<Self>
    where
        Self: Sized,
    {
        let header = RecordHeader {
            sequence_number: data.get_u32(),
            first_subtype: data.get_u8(),
            record_type: data.get_u8(),
            second_subtype: data.get_u8(),
            third_subtype: data.get_u8(),
            length: data.get_u32(),
        };
        Ok(header)
    }
}

/// Read the record header at the start of `buffer`.
pub fn read_header(buffer: &[u8]) -> Result<RecordHeader> {
    ensure!(
        buffer.len() >= HEADER_LENGTH,
        TruncatedHeaderSnafu {
            available: buffer.len()
        }
    );
    RecordHeader::from_bytes_unchecked(&buffer[..HEADER_LENGTH])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ceos::field::{tests::assert_well_formed, TableBuilder};

    #[test]
    fn read_volume_descriptor_header() {
        let data = [
            0x00, 0x00, 0x00, 0x01, 192, 192, 18, 18, 0x00, 0x00, 0x01, 0x68, b'A', b' ',
        ];
        let header = read_header(&data).unwrap();
        assert_eq!(1, header.sequence_number);
        assert_eq!(RecordCodes([192, 192, 18, 18]), header.codes());
        assert_eq!(360, header.declared_length());
        assert_eq!("192,192,18,18", header.codes().to_string());
    }

    #[test]
    fn maximum_values() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF, 255, 0, 1, 2, 0xFF, 0xFF, 0xFF, 0xFF];
        let header = read_header(&data).unwrap();
        assert_eq!(4294967295, header.sequence_number);
        assert_eq!(u32::MAX, header.length);
    }

    #[test]
    fn short_buffer_is_truncated_header() {
        let data = [0u8; 11];
        match read_header(&data) {
            Err(CeosError::TruncatedHeader { available, .. }) => assert_eq!(11, available),
            other => panic!("Expected TruncatedHeader, got {other:?}"),
        }
        assert!(read_header(&[]).is_err());
    }

    #[test]
    fn header_fields_cover_the_prefix() {
        let table = TableBuilder::with_header().build();
        assert_eq!(HEADER_LENGTH, assert_well_formed(&table));
    }
}
