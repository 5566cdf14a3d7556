//! Standard numbers, one module per number. Every module offers `compact` (strip separators,
//! normalize case), `validate` (the compact form or why the number is invalid), `is_valid` and
//! `format`. Country specific numbers live in a module named after the ISO 3166 country code.

pub mod cn;
pub mod de;
pub mod ean;
pub mod es;
pub mod fr;
pub mod iban;
pub mod isbn;
pub mod ismn;
pub mod issn;
pub mod nl;
