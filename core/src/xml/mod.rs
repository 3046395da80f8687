//! Minimal owned DOM used for both reading xmlcon files and stamping PSA templates.

pub mod element;

pub use element::{Descendants, Element};
