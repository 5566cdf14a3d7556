//! Spain.

pub mod dni;
