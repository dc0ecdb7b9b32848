use super::*;
use std::str::FromStr;

/// How the bytes of a field are encoded.
///
/// Codes follow the CEOS notation: `A16` is 16 bytes of text, `B4` a 4 byte big-endian
/// binary integer, `I8` an ASCII integer, and `F16.7`/`E16.7`/`D22.15` ASCII
/// fixed, exponential and double precision numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldFormat {
    Ascii(usize),
    Binary(usize),
    Integer(usize),
    Fixed { width: usize, decimals: usize },
    Exponential { width: usize, decimals: usize },
    Double { width: usize, decimals: usize },
}
impl FieldFormat {
    /// Number of bytes the field occupies.
    pub const fn width(&self) -> usize {
        match *self {
            Self::Ascii(width) | Self::Binary(width) | Self::Integer(width) => width,
            Self::Fixed { width, .. }
            | Self::Exponential { width, .. }
            | Self::Double { width, .. } => width,
        }
    }

    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    pub fn code(&self) -> String {
        self.to_string()
    }
}
impl fmt::Display for FieldFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii(width) => write!(f, "A{width}"),
            Self::Binary(width) => write!(f, "B{width}"),
            Self::Integer(width) => write!(f, "I{width}"),
            Self::Fixed { width, decimals } => write!(f, "F{width}.{decimals}"),
            Self::Exponential { width, decimals } => write!(f, "E{width}.{decimals}"),
            Self::Double { width, decimals } => write!(f, "D{width}.{decimals}"),
        }
    }
}
impl FromStr for FieldFormat {
    type Err = CeosError;

    fn from_str(code: &str) -> Result<Self> {
        let invalid = || InvalidFormatCodeSnafu { code }.build();
        let mut chars = code.chars();
        let kind = chars.next().ok_or_else(invalid)?;
        let rest = chars.as_str();
        let (width, decimals) = match rest.split_once('.') {
            Some((width, decimals)) => (width, Some(decimals)),
            None => (rest, None),
        };
        let width: usize = width.parse().map_err(|_| invalid())?;
        ensure!(width > 0, InvalidFormatCodeSnafu { code });
        let decimals: Option<usize> = decimals
            .map(|d| d.parse::<usize>().map_err(|_| invalid()))
            .transpose()?;
        match (kind, decimals) {
            ('A', None) => Ok(Self::Ascii(width)),
            ('B', None) if width <= 4 => Ok(Self::Binary(width)),
            ('I', None) => Ok(Self::Integer(width)),
            ('F', Some(decimals)) => Ok(Self::Fixed { width, decimals }),
            ('E', Some(decimals)) => Ok(Self::Exponential { width, decimals }),
            ('D', Some(decimals)) => Ok(Self::Double { width, decimals }),
            _ => Err(invalid()),
        }
    }
}

pub const fn ascii(width: usize) -> FieldFormat {
    FieldFormat::Ascii(width)
}
pub const fn binary(width: usize) -> FieldFormat {
    FieldFormat::Binary(width)
}
pub const fn int(width: usize) -> FieldFormat {
    FieldFormat::Integer(width)
}
pub const fn fixed(width: usize, decimals: usize) -> FieldFormat {
    FieldFormat::Fixed { width, decimals }
}
pub const fn exp(width: usize, decimals: usize) -> FieldFormat {
    FieldFormat::Exponential { width, decimals }
}
pub const fn double(width: usize, decimals: usize) -> FieldFormat {
    FieldFormat::Double { width, decimals }
}

/// A field layout as written in a record table.
///
/// Positions are 1-based and inclusive. In a repeat group they are relative to the
/// start of the group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub start: usize,
    pub end: usize,
    pub format: FieldFormat,
    pub unit: &'static str,
    pub description: &'static str,
}

pub const fn field(
    start: usize,
    end: usize,
    format: FieldFormat,
    unit: &'static str,
    description: &'static str,
) -> FieldSpec {
    FieldSpec {
        start,
        end,
        format,
        unit,
        description,
    }
}

/// Position of a field inside a repeat group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupIndex {
    /// What one group is called, e.g. "point".
    pub noun: &'static str,
    /// 0-based group number.
    pub index: usize,
}

/// One field of a record, positioned relative to the start of the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: usize,
    pub start: usize,
    pub end: usize,
    pub format: FieldFormat,
    pub unit: &'static str,
    pub description: &'static str,
    pub group: Option<GroupIndex>,
}
impl FieldDescriptor {
    pub fn byte_range(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    /// The description, qualified with the group number for repeated fields.
    pub fn label(&self) -> String {
        match self.group {
            Some(GroupIndex { noun, index }) => {
                format!("{} [{noun} {}]", self.description, index + 1)
            }
            None => self.description.to_string(),
        }
    }
}

/// Assembles a record's field table.
///
/// Fixed parts come straight from [FieldSpec] tables, repeat groups are laid out at
/// a stride equal to the group's width.
#[derive(Clone, Debug, Default)]
pub struct TableBuilder {
    fields: Vec<FieldDescriptor>,
}
impl TableBuilder {
    /// A table starting with the six header fields every record carries.
    pub fn with_header() -> Self {
        Self::default().fields(&header::HEADER_FIELDS)
    }

    pub fn fields(self, specs: &[FieldSpec]) -> Self {
        self.shifted(0, specs)
    }

    /// Append `specs` with every position moved by `offset` bytes.
    pub fn shifted(mut self, offset: usize, specs: &[FieldSpec]) -> Self {
        for spec in specs {
            self.push(spec, offset, None);
        }
        self
    }

    /// Append `count` copies of `group`, the first one starting at byte `first_start`.
    pub fn repeat(
        mut self,
        noun: &'static str,
        first_start: usize,
        count: usize,
        group: &[FieldSpec],
    ) -> Self {
        let stride = group_width(group);
        self.fields.reserve(count * group.len());
        for index in 0..count {
            let offset = first_start - 1 + index * stride;
            for spec in group {
                self.push(spec, offset, Some(GroupIndex { noun, index }));
            }
        }
        self
    }

    /// Cover the bytes between the current extent and `end` with a spare field.
    pub fn pad_to(self, end: usize) -> Self {
        let extent = self.extent();
        if end <= extent {
            return self;
        }
        self.fields(&[field(extent + 1, end, ascii(end - extent), "-", "Spare")])
    }

    /// The last byte covered by the table so far.
    pub fn extent(&self) -> usize {
        self.fields.iter().map(|f| f.end).max().unwrap_or(0)
    }

    pub fn build(self) -> Vec<FieldDescriptor> {
        self.fields
    }

    fn push(&mut self, spec: &FieldSpec, offset: usize, group: Option<GroupIndex>) {
        let id = self.fields.len() + 1;
        self.fields.push(FieldDescriptor {
            id,
            start: spec.start + offset,
            end: spec.end + offset,
            format: spec.format,
            unit: spec.unit,
            description: spec.description,
            group,
        });
    }
}

/// Width in bytes of one repeat group.
pub const fn group_width(group: &[FieldSpec]) -> usize {
    let mut width = 0;
    let mut i = 0;
    while i < group.len() {
        if group[i].end > width {
            width = group[i].end;
        }
        i += 1;
    }
    width
}
