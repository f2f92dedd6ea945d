//! Leaf field kinds emitted by the values form schema.

use serde::{Deserialize, Serialize};

use super::slider::{RangeSlider, TemporaryRangeSlider};
use super::HelmValuesPath;

/// A leaf of the form tree, discriminated by `fieldType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fieldType")]
pub enum FormField {
    #[serde(rename = "text field")]
    TextField(TextField),

    #[serde(rename = "number field")]
    NumberField(NumberField),

    #[serde(rename = "checkbox")]
    Checkbox(Checkbox),

    #[serde(rename = "select")]
    Select(Select),

    /// One endpoint of a range that has not been merged yet.
    #[serde(rename = "temporary range slider")]
    TemporaryRangeSlider(TemporaryRangeSlider),

    /// A dual-ended slider produced by the merger.
    #[serde(rename = "range slider")]
    RangeSlider(RangeSlider),
}

impl FormField {
    /// Title shown by the renderer. Temporary endpoints may not carry one.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::TextField(f) => Some(&f.title),
            Self::NumberField(f) => Some(&f.title),
            Self::Checkbox(f) => Some(&f.title),
            Self::Select(f) => Some(&f.title),
            Self::TemporaryRangeSlider(f) => f.title.as_deref(),
            Self::RangeSlider(f) => Some(&f.title),
        }
    }

    /// The `fieldType` tag this field serializes with.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TextField(_) => "text field",
            Self::NumberField(_) => "number field",
            Self::Checkbox(_) => "checkbox",
            Self::Select(_) => "select",
            Self::TemporaryRangeSlider(_) => "temporary range slider",
            Self::RangeSlider(_) => "range slider",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextField {
    pub title: String,
    pub description: String,
    pub is_readonly: bool,
    pub helm_values_path: HelmValuesPath,
    pub helm_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberField {
    pub title: String,
    pub description: String,
    pub is_readonly: bool,
    pub helm_values_path: HelmValuesPath,
    pub helm_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkbox {
    pub title: String,
    pub description: String,
    pub is_readonly: bool,
    pub helm_values_path: HelmValuesPath,
    pub helm_value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Select {
    pub title: String,
    pub description: String,
    pub is_readonly: bool,
    pub helm_values_path: HelmValuesPath,
    pub helm_value: String,
    pub options: Vec<String>,
}
