//! The Netherlands.

pub mod bsn;
pub mod btw;
