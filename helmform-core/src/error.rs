//! Error taxonomy for the merge pass.
//!
//! A temporary slider without a partner is not an error and never shows up
//! here; it simply stays in the tree.

use thiserror::Error;

use crate::form::SliderExtremity;

/// Failure to read the numeric magnitude out of a `helmValue` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueParseError {
    #[error("value '{value}' does not end with unit '{unit}'")]
    UnitMismatch { value: String, unit: String },

    #[error("value '{value}' has no numeric magnitude before unit '{unit}'")]
    Malformed { value: String, unit: String },
}

/// Errors raised while merging temporary sliders into range sliders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("range '{range_id}' in group '{path}' has no title on either endpoint")]
    MissingTitle { range_id: String, path: String },

    #[error("range '{range_id}' ({extremity} endpoint): {source}")]
    Value {
        range_id: String,
        extremity: SliderExtremity,
        source: ValueParseError,
    },

    #[error("range '{range_id}': endpoints disagree on {property} (down = {down}, up = {up})")]
    EndpointMismatch {
        range_id: String,
        property: &'static str,
        down: String,
        up: String,
    },
}

impl MergeError {
    /// The `sliderRangeId` of the pair that failed.
    pub fn range_id(&self) -> &str {
        match self {
            Self::MissingTitle { range_id, .. }
            | Self::Value { range_id, .. }
            | Self::EndpointMismatch { range_id, .. } => range_id,
        }
    }
}
