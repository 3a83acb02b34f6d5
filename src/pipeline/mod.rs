//! Pipeline module - the filter-and-aggregate core

pub mod aggregate;
pub mod describe;
pub mod error;
pub mod filter;
pub mod loader;

pub use aggregate::*;
pub use describe::*;
pub use error::*;
pub use filter::*;
pub use loader::*;
