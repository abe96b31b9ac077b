//! Error types for edge path construction

use thiserror::Error;

/// Errors reported by the validating [`edge_path`](crate::edge_path) entry
/// point.
///
/// The individual path builders are infallible: they accept any finite
/// coordinates and never panic. Non-finite input is only rejected here;
/// calling a builder directly with NaN or infinity lets the values
/// propagate arithmetically into the output.
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    /// A coordinate or style value was NaN or infinite
    #[error("non-finite value for {name}: {value}")]
    NonFinite { name: &'static str, value: f64 },
}
