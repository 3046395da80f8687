//! Core conversion library for SBE 911 CTD setup files.
//!
//! An xmlcon instrument configuration is read into typed records by
//! [`ConfigExtractor`], then [`TemplateAssembler`] stamps calculation
//! templates into a PSA skeleton to produce a DataConversion setup file.

pub mod prelude;
pub mod psa;
pub mod telemetry;
pub mod xml;
pub mod xmlcon;

#[cfg(test)]
mod fixtures;

pub use prelude::{ConversionError, ConversionResult, ReservedIds};
pub use psa::{CalcTemplateLibrary, PsaDocument, TemplateAssembler, VariableLookupTable};
pub use xmlcon::{CalibrationCoefficients, ConfigExtractor, InstrumentConfig};
