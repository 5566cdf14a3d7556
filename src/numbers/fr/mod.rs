//! France.

pub mod siren;
pub mod tva;
