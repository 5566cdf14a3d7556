//! China.

pub mod ric;
