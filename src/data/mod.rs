//! Range databases shipped with the crate, loaded on first use.

use crate::range_table::{parse_range_db, RangeDb, RangeDbBuilder, RangeSpec, TableError, ROOT_KEY};
use lazy_static::lazy_static;

lazy_static! {
    static ref ISBN_RANGES: Result<RangeDb, TableError> = parse_range_db(include_str!("isbn.dat"));
    static ref ISMN_PUBLISHERS: Result<RangeDb, TableError> = build_ismn_publishers();
}

/// Registration groups and registrant ranges of 978/979 prefixed ISBNs.
pub fn isbn_ranges() -> Result<&'static RangeDb, TableError> {
    ISBN_RANGES.as_ref().map_err(Clone::clone)
}

/// Publisher code lengths of ISMNs, looked up on the digits following `9790`.
pub fn ismn_publishers() -> Result<&'static RangeDb, TableError> {
    ISMN_PUBLISHERS.as_ref().map_err(Clone::clone)
}

fn build_ismn_publishers() -> Result<RangeDb, TableError> {
    [
        ("000", "099"),
        ("1000", "3999"),
        ("40000", "69999"),
        ("700000", "899999"),
        ("9000000", "9999999"),
    ]
    .into_iter()
    .fold(RangeDbBuilder::new(), |builder, (lower, upper)| {
        builder.range(ROOT_KEY, RangeSpec::new(lower, upper, lower.len()))
    })
    .build()
}
