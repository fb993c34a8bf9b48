//! Module encoders for symbologies not covered by the barcoders crate.
//!
//! Each encoder validates its input and produces the same representation
//! barcoders does: a `Vec<u8>` of 0/1 modules, 1 = bar.

pub mod msi;
pub mod pharmacode;
