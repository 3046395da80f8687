//! xmlcon instrument configuration model and extractor.

pub mod coeffs;
pub mod config;
pub mod extractor;

pub use coeffs::{CalibrationCoefficients, CalibrationRecord, CoeffValue};
pub use config::{InstrumentConfig, SensorAttributeMap};
pub use extractor::ConfigExtractor;
