//! Helmform Core — form-field tree model and range-slider merger.
//!
//! Helm chart values are rendered as a tree of form fields. The schema
//! builder emits each request/limit pair as two temporary slider endpoints;
//! this crate fuses them into dual-ended range sliders before the tree is
//! handed to the renderer.
//!
//! - [`form`]: tree model and its JSON shape
//! - [`units`]: `"150m"`-style magnitude parsing
//! - [`merge`]: the range-slider merge pass
//! - [`inspect`]: tree statistics
//! - [`config`]: TOML configuration

pub mod config;
pub mod error;
pub mod form;
pub mod inspect;
pub mod merge;
pub mod units;

pub use config::{ConfigError, HelmformConfig, OutputConfig};
pub use error::{MergeError, ValueParseError};
pub use form::{FormDocument, FormField, FormFieldGroup, FormFieldGroupLike};
pub use inspect::{temporary_sliders, SliderLocation, TreeStats};
pub use merge::{
    merge_range_sliders, merged_range_sliders, EndpointAgreement, MergeOptions, MergeReport,
    RangeSliderMerger,
};
pub use units::{format_with_unit, parse_numeric_prefix};
