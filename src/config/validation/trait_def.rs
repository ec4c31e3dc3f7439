//! Validation trait definition

/// Checked by every configuration section before the router is built
///
/// The error is a human-readable message naming the offending field.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
