use super::*;
use field::{FieldDescriptor, FieldFormat, FieldSpec};
use header::RecordHeader;
use itertools::Itertools;

/// Result of decoding a single field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldOutcome {
    Value(String),
    /// The field consists entirely of filler characters.
    Filler,
    /// The field extends past the end of the buffer.
    Truncated,
}
impl FieldOutcome {
    pub fn into_string(self) -> String {
        match self {
            Self::Value(value) => value,
            Self::Filler | Self::Truncated => String::new(),
        }
    }

    fn status(&self) -> FieldStatus {
        match self {
            Self::Value(_) => FieldStatus::Decoded,
            Self::Filler => FieldStatus::Filler,
            Self::Truncated => FieldStatus::Truncated,
        }
    }
}

/// What happened to each field of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldStatus {
    Decoded,
    Filler,
    Truncated,
    /// Not attempted, since an earlier field ran past the declared record length.
    NotReached,
}

/// Decode the field described by `descriptor` from a buffer starting at the record's first byte.
pub fn decode(buffer: &[u8], descriptor: &FieldDescriptor) -> FieldOutcome {
    decode_range(buffer, descriptor.start, descriptor.end, descriptor.format)
}

/// Same as [decode], with filler and truncated fields as empty strings.
pub fn decode_to_string(buffer: &[u8], descriptor: &FieldDescriptor) -> String {
    decode(buffer, descriptor).into_string()
}

/// Decode a field straight from its layout entry, without building a table.
pub fn decode_spec(buffer: &[u8], spec: &FieldSpec) -> FieldOutcome {
    decode_range(buffer, spec.start, spec.end, spec.format)
}

fn decode_range(buffer: &[u8], start: usize, end: usize, format: FieldFormat) -> FieldOutcome {
    let Some(bytes) = buffer.field_bytes(start, end) else {
        return FieldOutcome::Truncated;
    };
    if format.is_binary() {
        FieldOutcome::Value(bytes.read_be_uint().to_string())
    } else if bytes.is_filler() {
        FieldOutcome::Filler
    } else {
        // Single byte code page, so every byte maps to some character.
        let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
        FieldOutcome::Value(text.into_owned())
    }
}

/// Read an embedded repeat count described by `spec`.
///
/// Filler, unparsable and negative counts all yield 0.
pub fn peek_count(buffer: &[u8], spec: &FieldSpec) -> usize {
    match decode_spec(buffer, spec) {
        FieldOutcome::Value(text) => text
            .trim()
            .parse::<i64>()
            .map(|count| count.max(0) as usize)
            .unwrap_or(0),
        FieldOutcome::Filler | FieldOutcome::Truncated => 0,
    }
}

/// A record decoded against its field table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRecord {
    pub header: RecordHeader,
    pub fields: Vec<FieldDescriptor>,
    /// One entry per field, empty where nothing was decoded.
    pub values: Vec<String>,
    pub statuses: Vec<FieldStatus>,
}
impl FieldRecord {
    pub fn sequence_number(&self) -> u32 {
        self.header.sequence_number
    }

    /// Every field was either decoded or found to be filler.
    pub fn is_complete(&self) -> bool {
        self.statuses
            .iter()
            .all(|s| matches!(s, FieldStatus::Decoded | FieldStatus::Filler))
    }

    /// The last byte covered by the field table.
    pub fn extent(&self) -> usize {
        self.fields.iter().map(|f| f.end).max().unwrap_or(0)
    }

    /// The record's length as established by decoding, if every field could be decoded.
    pub fn decoded_length(&self) -> Option<usize> {
        self.is_complete().then(|| self.extent())
    }

    pub fn value(&self, id: usize) -> Option<&str> {
        id.checked_sub(1)
            .and_then(|index| self.values.get(index))
            .map(String::as_str)
    }

    /// The value of the first field with exactly this `description`.
    pub fn value_of(&self, description: &str) -> Option<&str> {
        self.fields
            .iter()
            .position(|f| f.description == description)
            .map(|index| self.values[index].as_str())
    }

    /// All values of fields with this `description`, in table order.
    pub fn values_of(&self, description: &str) -> Vec<&str> {
        self.fields
            .iter()
            .positions(|f| f.description == description)
            .map(|index| self.values[index].as_str())
            .collect()
    }

    /// `(description, value, unit)` for each field in table order.
    pub fn triples(&self, include_empty: bool) -> Vec<FieldTriple> {
        self.fields
            .iter()
            .zip(self.values.iter())
            .filter(|(_, value)| include_empty || !value.is_empty())
            .map(|(field, value)| FieldTriple {
                description: field.label(),
                value: value.clone(),
                unit: field.unit,
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FieldTriple {
    pub description: String,
    pub value: String,
    pub unit: &'static str,
}

/// Decode `fields` from `buffer`, which starts at the record's header.
///
/// Decoding stops at the first field that ends after the declared record length;
/// it and all following fields are left empty.
pub fn decode_table(
    buffer: &[u8],
    header: &RecordHeader,
    fields: Vec<FieldDescriptor>,
    ctx: &mut DecodingContext,
) -> FieldRecord {
    let declared_length = header.declared_length();
    let mut values = Vec::with_capacity(fields.len());
    let mut statuses = Vec::with_capacity(fields.len());
    let mut stopped = false;
    for descriptor in fields.iter() {
        if !stopped && descriptor.end > declared_length {
            ctx.report(DiagnosticKind::DecodeStopped {
                field: descriptor.id,
                end: descriptor.end,
                declared_length,
            });
            stopped = true;
        }
        if stopped {
            values.push(String::new());
            statuses.push(FieldStatus::NotReached);
            continue;
        }
        let outcome = decode(buffer, descriptor);
        if outcome == FieldOutcome::Truncated {
            ctx.report(DiagnosticKind::FieldOutOfRange {
                field: descriptor.id,
                end: descriptor.end,
                available: buffer.len(),
            });
        }
        statuses.push(outcome.status());
        values.push(outcome.into_string());
    }
    FieldRecord {
        header: *header,
        fields,
        values,
        statuses,
    }
}
