//! Hierarchical prefix range tables, used to split structured numbers (ISBN, ISMN...) into their
//! registration group, registrant and item parts.
//!
//! A [`RangeDb`] is an arena of [`RangeTable`]s. Every table holds non-overlapping ranges of
//! fixed width digit strings, and an entry can point to the table that decomposes the digits
//! following its prefix. Databases are built once, either from the line oriented text format
//! ([`parse_range_db`]) or in memory ([`RangeDbBuilder`]), and are read-only afterwards.

mod builder;
mod parser;
mod table;

pub use builder::{RangeDbBuilder, RangeSpec};
pub use parser::parse_range_db;
pub use table::{Lookup, RangeDb, RangeEntry, RangeTable, Segment, TableId, ROOT_KEY};

use thiserror::Error;

/// Failures of a lookup in a loaded database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The digits are not part of any declared range: an unassigned or invalid number.
    #[error("No range of table {table:?} contains {digits:?}")]
    NoMatchingRange { table: String, digits: String },

    /// The key does not name a table of the database. This is a bug of the caller or of the
    /// data, not a property of the number being looked up.
    #[error("There is no range table named {0:?}")]
    UnknownTable(String),

    #[error("The digits to look up are empty or not all ASCII digits")]
    InvalidInput,
}

/// Failures while loading a database. These are checked once so lookups can rely on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Syntax error on line {line}")]
    Syntax { line: usize },

    #[error("The bound {bound:?} of table {table:?} is not made of ASCII digits")]
    InvalidBound { table: String, bound: String },

    #[error("The bound {bound:?} of table {table:?} does not have the table's width {width}")]
    InconsistentWidth {
        table: String,
        bound: String,
        width: usize,
    },

    #[error("The prefix length {prefix_len} of range {bound:?} in table {table:?} is invalid")]
    InvalidPrefixLength {
        table: String,
        bound: String,
        prefix_len: usize,
    },

    #[error("The range {lower:?}-{upper:?} of table {table:?} is inverted")]
    InvertedRange {
        table: String,
        lower: String,
        upper: String,
    },

    /// Past the prefix, lower bounds must be padded with `0` and upper bounds with `9`.
    #[error("The bound {bound:?} of table {table:?} is not padded past its prefix")]
    UnpaddedBound { table: String, bound: String },

    #[error("The ranges {first:?} and {second:?} of table {table:?} overlap")]
    OverlappingRanges {
        table: String,
        first: String,
        second: String,
    },

    #[error("A range points to the table {0:?} which does not exist")]
    UnknownTable(String),
}
