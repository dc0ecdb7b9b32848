//! Decoder for the records of CEOS-SAR leader, trailer and volume directory files.
//!
//! A file is a sequence of self-describing records. [ceos::CeosFileReader] loads one
//! and walks it record by record, decoding every field of the known record kinds
//! into text values.

pub mod ceos;
pub use ceos::{
    records::RecordValue,
    report::{ReportFormat, ReportOptions, Summary},
    walk,
    CeosError,
    CeosFileReader,
    Diagnostic,
    Outcome,
    WalkEntry,
};
