//! Form-field tree model for Helm values forms.
//!
//! A form is a tree of [`FormFieldGroupLike`] nodes: groups mirror one
//! segment of the chart values hierarchy, fields are the editable leaves.

pub mod field;
pub mod slider;

pub use field::{Checkbox, FormField, NumberField, Select, TextField};
pub use slider::{RangeEnd, RangeSlider, SliderExtremity, TemporaryRangeSlider};

use serde::{Deserialize, Serialize};

/// Segments locating a value inside the chart values hierarchy.
pub type HelmValuesPath = Vec<String>;

/// A node of the form tree: either a group of children or a leaf field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormFieldGroupLike {
    Group(FormFieldGroup),
    Field(FormField),
}

impl FormFieldGroupLike {
    pub fn as_group(&self) -> Option<&FormFieldGroup> {
        match self {
            Self::Group(group) => Some(group),
            Self::Field(_) => None,
        }
    }

    pub fn as_field(&self) -> Option<&FormField> {
        match self {
            Self::Field(field) => Some(field),
            Self::Group(_) => None,
        }
    }

    /// The temporary slider endpoint carried by this node, if any.
    pub fn as_temporary_slider(&self) -> Option<&TemporaryRangeSlider> {
        match self {
            Self::Field(FormField::TemporaryRangeSlider(slider)) => Some(slider),
            _ => None,
        }
    }

    pub fn as_range_slider(&self) -> Option<&RangeSlider> {
        match self {
            Self::Field(FormField::RangeSlider(slider)) => Some(slider),
            _ => None,
        }
    }
}

impl From<FormFieldGroup> for FormFieldGroupLike {
    fn from(group: FormFieldGroup) -> Self {
        Self::Group(group)
    }
}

impl From<FormField> for FormFieldGroupLike {
    fn from(field: FormField) -> Self {
        Self::Field(field)
    }
}

/// A group of form nodes sharing one segment of the values hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldGroup {
    pub helm_values_path_segment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub children: Vec<FormFieldGroupLike>,
}

impl FormFieldGroup {
    pub fn new(segment: impl Into<String>, children: Vec<FormFieldGroupLike>) -> Self {
        Self {
            helm_values_path_segment: segment.into(),
            description: None,
            children,
        }
    }
}

/// A form as handed over by the schema builder: one root node or a list of
/// top-level nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormDocument {
    Forest(Vec<FormFieldGroupLike>),
    Node(FormFieldGroupLike),
}

impl FormDocument {
    /// Parse a JSON document. Arrays are read as a forest, anything else as
    /// a single node, so decode errors point at the node that failed.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        if value.is_array() {
            serde_json::from_value(value).map(Self::Forest)
        } else {
            serde_json::from_value(value).map(Self::Node)
        }
    }

    /// Top-level nodes of the document.
    pub fn nodes(&self) -> &[FormFieldGroupLike] {
        match self {
            Self::Forest(nodes) => nodes,
            Self::Node(node) => std::slice::from_ref(node),
        }
    }
}
