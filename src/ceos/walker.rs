use super::*;
use dispatch::{classify, refine, Classification};
use header::{read_header, RecordHeader, HEADER_LENGTH};
use records::{decode_record, RecordValue};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// A CEOS-SAR file, read into memory as a whole.
#[derive(Debug)]
pub struct CeosFileReader {
    pub file_name: PathBuf,
    data: Vec<u8>,
}
impl CeosFileReader {
    /// Read all of `path`. The file is closed again before this returns.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_name = path.as_ref().to_path_buf();
        let data = fs::read(&file_name).context(IoSnafu {
            path: file_name.clone(),
        })?;
        log::debug!("Read {} bytes from {}", data.len(), file_name.display());
        Ok(Self { file_name, data })
    }

    pub fn from_bytes<P: Into<PathBuf>>(file_name: P, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Gives an iterator over all records, in file order.
    pub fn records(&self) -> RecordWalker<'_> {
        RecordWalker::new(&self.data)
    }
}

/// Why a record was stepped over without being decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The code bytes match no known record kind.
    Unrecognized,
    /// A facility related data record of a form without a known layout.
    UnsupportedSubvariant { id: String },
    Failed(String),
}
impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized => write!(f, "unrecognized record type"),
            Self::UnsupportedSubvariant { id } => write!(f, "unsupported sub-form '{id}'"),
            Self::Failed(message) => write!(f, "{message}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Decoded(RecordValue),
    Skipped(SkipReason),
}

/// One step of a walk: the record found at `offset` and how far the walk moved on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkEntry {
    pub offset: usize,
    pub header: RecordHeader,
    pub outcome: Outcome,
    /// Bytes from `offset` to the next record.
    pub advance: usize,
    pub diagnostics: Vec<Diagnostic>,
}
impl WalkEntry {
    pub fn value(&self) -> Option<&RecordValue> {
        match &self.outcome {
            Outcome::Decoded(value) => Some(value),
            Outcome::Skipped(_) => None,
        }
    }

    pub fn is_decoded(&self) -> bool {
        self.value().is_some()
    }

    pub fn label(&self) -> String {
        match self.value() {
            Some(value) => value.label(),
            None => format!("Record ({})", self.header.codes()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WalkState {
    Positioned(usize),
    Done,
}

/// Steps through a buffer of back to back records.
///
/// Every record is either decoded or skipped; the walk only ends when too few bytes
/// remain for another header.
#[derive(Clone, Debug)]
pub struct RecordWalker<'a> {
    buffer: &'a [u8],
    state: WalkState,
}
impl<'a> RecordWalker<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            state: WalkState::Positioned(0),
        }
    }

    fn step(&self, offset: usize) -> Option<WalkEntry> {
        let remaining = self.buffer.get(offset..)?;
        let header = match read_header(remaining) {
            Ok(header) => header,
            Err(error) => {
                log::debug!("Stopping at offset {offset}: {error}");
                return None;
            }
        };
        let declared = header.declared_length();
        let mut ctx = DecodingContext::at_offset(offset);
        let outcome = match classify(header.codes()) {
            Classification::Known(kind) => {
                let kind = refine(kind, &header);
                match decode_record(remaining, &header, kind, &mut ctx) {
                    Ok(value) => Outcome::Decoded(value),
                    Err(CeosError::UnsupportedSubvariant { id, .. }) => {
                        Outcome::Skipped(SkipReason::UnsupportedSubvariant { id })
                    }
                    Err(error) => {
                        log::debug!("offset {offset}: failed to decode {kind}: {error}");
                        Outcome::Skipped(SkipReason::Failed(error.to_string()))
                    }
                }
            }
            Classification::Unrecognized => {
                ctx.report(DiagnosticKind::UnrecognizedRecordType {
                    codes: header.codes(),
                    skipped: declared.max(HEADER_LENGTH),
                });
                Outcome::Skipped(SkipReason::Unrecognized)
            }
        };
        let actual_length = match &outcome {
            Outcome::Decoded(value) => {
                value.decoded_length().unwrap_or(declared) + value.trailing_bytes()
            }
            Outcome::Skipped(_) => declared,
        };
        let advance = actual_length.max(HEADER_LENGTH);
        log::trace!("offset {offset}: {header:?}, advancing {advance} bytes");
        Some(WalkEntry {
            offset,
            header,
            outcome,
            advance,
            diagnostics: ctx.into_diagnostics(),
        })
    }
}
impl Iterator for RecordWalker<'_> {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let WalkState::Positioned(offset) = self.state else {
            return None;
        };
        let Some(entry) = self.step(offset) else {
            self.state = WalkState::Done;
            return None;
        };
        let runs_past_end = entry.header.declared_length() > self.buffer.len() - offset;
        let next = offset.saturating_add(entry.advance);
        self.state = if runs_past_end || next >= self.buffer.len() {
            WalkState::Done
        } else {
            WalkState::Positioned(next)
        };
        Some(entry)
    }
}

/// Decode every record in `buffer`.
pub fn walk(buffer: &[u8]) -> Vec<WalkEntry> {
    RecordWalker::new(buffer).collect()
}
