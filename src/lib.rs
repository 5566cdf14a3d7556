// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

pub mod alphabet;
pub mod checksum;
mod config;
mod data;
mod error;
pub mod numbers;
pub mod range_table;
mod registry;
mod util;

// This is the public API of the stdnum library
pub use alphabet::{Alphabet, AlphabetError};
pub use checksum::ChecksumError;
pub use config::{FormatConfig, IdentifierKind, RegistryConfig};
pub use data::{isbn_ranges, ismn_publishers};
pub use error::ValidationError;
pub use range_table::{parse_range_db, RangeDb, RangeDbBuilder, RangeError, RangeSpec, TableError};
pub use registry::{Registry, RegistryError, ValidatorDescriptor};
pub use util::clean;
