#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color matrix filters module.
pub mod color;

/// compositing filters module.
pub mod composite;

/// error types for the filter engine.
pub mod error;

/// neighborhood filters module.
pub mod filter;

/// module containing parallelization utilities.
pub mod parallel;

/// named filter dispatch module.
pub mod preset;

/// per-pixel remapping filters module.
pub mod stylize;

pub use error::{FilterError, MatrixFormatError};
pub use preset::Filter;
