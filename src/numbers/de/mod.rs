//! Germany.

pub mod vat;
