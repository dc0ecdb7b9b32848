use dispatch::RecordKind;
use header::RecordCodes;
use snafu::{prelude::*, Backtrace};
use std::{fmt, path::PathBuf};

pub mod decoder;
pub mod dispatch;
pub mod field;
pub mod header;
pub mod records;
pub mod report;
mod walker;
pub use walker::{walk, CeosFileReader, Outcome, RecordWalker, SkipReason, WalkEntry};

/// Bytes that denote "value not present" when they make up an entire ASCII field.
const FILLER_ALPHABET: [u8; 5] = [b' ', b'-', b'9', b'E', b'.'];

trait FromFixedLengthBytes {
    const LENGTH: usize;

    /// `data` *must* be at least `LENGTH` bytes long.
    fn from_bytes_unchecked(data: &[u8]) -> Result<Self>
    where
        Self: Sized;
}

pub type Result<T> = std::result::Result<T, CeosError>;

#[derive(Debug, Snafu)]
pub enum CeosError {
    #[snafu(display("Only {available} bytes remain, but a record header needs 12"))]
    TruncatedHeader {
        available: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("{kind} sub-form '{id}' is not supported"))]
    UnsupportedSubvariant {
        kind: RecordKind,
        id: String,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid field format code '{code}'"))]
    InvalidFormatCode { code: String, backtrace: Backtrace },
    #[snafu(display("Could not read {}: {source}", path.display()))]
    Io {
        source: std::io::Error,
        path: PathBuf,
        backtrace: Backtrace,
    },
}

/// A non-fatal condition found while decoding the record at `offset`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Byte offset of the record within the file.
    pub offset: usize,
    pub kind: DiagnosticKind,
}
impl Diagnostic {
    pub fn level(&self) -> log::Level {
        match self.kind {
            DiagnosticKind::HeaderMismatch { .. }
            | DiagnosticKind::FieldOutOfRange { .. }
            | DiagnosticKind::UnsupportedSubvariant { .. } => log::Level::Warn,
            DiagnosticKind::DecodeStopped { .. }
            | DiagnosticKind::UnrecognizedRecordType { .. } => log::Level::Info,
            DiagnosticKind::LengthDisagreement { .. } => log::Level::Debug,
        }
    }
}
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset {}: {}", self.offset, self.kind)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The record was dispatched to `kind`, but its codes are not among the kind's tuples.
    HeaderMismatch { kind: RecordKind, found: RecordCodes },
    /// The field's bytes lie past the end of the available data.
    FieldOutOfRange {
        field: usize,
        end: usize,
        available: usize,
    },
    /// Decoding stopped at `field` since it ends after the declared record length.
    DecodeStopped {
        field: usize,
        end: usize,
        declared_length: usize,
    },
    UnrecognizedRecordType {
        codes: RecordCodes,
        skipped: usize,
    },
    UnsupportedSubvariant { kind: RecordKind, id: String },
    /// The layout ends at `decoded`, short of the declared length. The rest is spare.
    LengthDisagreement { decoded: usize, declared: usize },
}
impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaderMismatch { kind, found } => write!(
                f,
                "record codes ({found}) do not match {kind}, decoding with its layout anyway"
            ),
            Self::FieldOutOfRange {
                field,
                end,
                available,
            } => write!(
                f,
                "field {field} ends at byte {end}, but only {available} bytes are present"
            ),
            Self::DecodeStopped {
                field,
                end,
                declared_length,
            } => write!(
                f,
                "stopped decoding at field {field} (ends at byte {end}, record length {declared_length})"
            ),
            Self::UnrecognizedRecordType { codes, skipped } => {
                write!(f, "unrecognized record codes ({codes}), skipping {skipped} bytes")
            }
            Self::UnsupportedSubvariant { kind, id } => {
                write!(f, "{kind} sub-form '{id}' is not supported, skipping record")
            }
            Self::LengthDisagreement { decoded, declared } => write!(
                f,
                "record layout ends at byte {decoded}, declared length is {declared}"
            ),
        }
    }
}

/// Collects the diagnostics raised while decoding one record.
#[derive(Clone, Debug, Default)]
pub struct DecodingContext {
    offset: usize,
    diagnostics: Vec<Diagnostic>,
}
impl DecodingContext {
    pub fn at_offset(offset: usize) -> Self {
        Self {
            offset,
            diagnostics: Vec::new(),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn report(&mut self, kind: DiagnosticKind) {
        log::trace!("offset {}: {kind}", self.offset);
        self.diagnostics.push(Diagnostic {
            offset: self.offset,
            kind,
        });
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

trait CeosSliceExt {
    /// The bytes at the 1-based inclusive range `start..=end`, if all of them are present.
    fn field_bytes(&self, start: usize, end: usize) -> Option<&[u8]>;

    /// Every byte is drawn from the filler alphabet.
    fn is_filler(&self) -> bool;

    /// Interpret all bytes as one unsigned big-endian integer (at most 8 bytes).
    fn read_be_uint(&self) -> u64;
}

impl CeosSliceExt for [u8] {
    fn field_bytes(&self, start: usize, end: usize) -> Option<&[u8]> {
        if start == 0 || start > end {
            return None;
        }
        self.get((start - 1)..end)
    }

    fn is_filler(&self) -> bool {
        self.iter().all(|b| FILLER_ALPHABET.contains(b))
    }

    fn read_be_uint(&self) -> u64 {
        use byteorder::{BigEndian, ByteOrder};
        match self.len() {
            0 => 0,
            n if n <= 8 => BigEndian::read_uint(self, n),
            n => BigEndian::read_uint(&self[(n - 8)..], 8),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Builds synthetic records for tests.
    pub(crate) struct RecordBuilder {
        bytes: Vec<u8>,
    }
    impl RecordBuilder {
        /// A record of `length` bytes filled with blanks, with a valid header.
        pub(crate) fn new(sequence_number: u32, codes: [u8; 4], length: u32) -> Self {
            let mut bytes = vec![b' '; length.max(12) as usize];
            bytes[0..4].copy_from_slice(&sequence_number.to_be_bytes());
            bytes[4..8].copy_from_slice(&codes);
            bytes[8..12].copy_from_slice(&length.to_be_bytes());
            Self { bytes }
        }

        /// Write `text` at the 1-based position `start`, growing the buffer if needed.
        pub(crate) fn put(mut self, start: usize, text: &str) -> Self {
            let end = start - 1 + text.len();
            if end > self.bytes.len() {
                self.bytes.resize(end, b' ');
            }
            self.bytes[(start - 1)..end].copy_from_slice(text.as_bytes());
            self
        }

        pub(crate) fn truncate(mut self, len: usize) -> Self {
            self.bytes.truncate(len);
            self
        }

        pub(crate) fn build(self) -> Vec<u8> {
            self.bytes
        }
    }

    #[test]
    fn field_bytes_are_one_based_and_inclusive() {
        let data = b"abcdef";
        assert_eq!(Some(&b"a"[..]), data.field_bytes(1, 1));
        assert_eq!(Some(&b"cde"[..]), data.field_bytes(3, 5));
        assert_eq!(None, data.field_bytes(5, 7));
        assert_eq!(None, data.field_bytes(0, 2));
        assert_eq!(None, data.field_bytes(4, 3));
    }

    #[test]
    fn filler_alphabet() {
        assert!(b"    ".is_filler());
        assert!(b"-9E. ".is_filler());
        assert!(b"9999".is_filler());
        assert!(!b" 12 ".is_filler());
        assert!(!b"ERS1".is_filler());
    }

    #[test]
    fn big_endian_integers() {
        assert_eq!(42, [0x00, 0x00, 0x00, 0x2A].read_be_uint());
        assert_eq!(4294967295, [0xFF, 0xFF, 0xFF, 0xFF].read_be_uint());
        assert_eq!(192, [0xC0].read_be_uint());
    }

    #[test]
    fn diagnostic_levels() {
        let mut ctx = DecodingContext::at_offset(720);
        ctx.report(DiagnosticKind::UnrecognizedRecordType {
            codes: RecordCodes([1, 2, 3, 4]),
            skipped: 100,
        });
        ctx.report(DiagnosticKind::FieldOutOfRange {
            field: 3,
            end: 40,
            available: 20,
        });
        let diagnostics = ctx.into_diagnostics();
        assert_eq!(2, diagnostics.len());
        assert_eq!(720, diagnostics[0].offset);
        assert_eq!(log::Level::Info, diagnostics[0].level());
        assert_eq!(log::Level::Warn, diagnostics[1].level());
        assert_eq!(
            "offset 720: unrecognized record codes (1,2,3,4), skipping 100 bytes",
            diagnostics[0].to_string()
        );
    }
}
