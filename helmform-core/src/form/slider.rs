//! Slider field types: unmerged endpoints and the merged range slider.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::HelmValuesPath;

/// Which end of a range a temporary slider represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderExtremity {
    /// Low end, usually the resource request.
    Down,
    /// High end, usually the resource limit.
    Up,
}

impl fmt::Display for SliderExtremity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down => write!(f, "down"),
            Self::Up => write!(f, "up"),
        }
    }
}

/// One endpoint of a logical range, waiting to be paired with its sibling.
///
/// Both endpoints of a range share `slider_range_id`. Only one of them is
/// expected to carry a `title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryRangeSlider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub slider_range_id: String,
    pub slider_extremity: SliderExtremity,
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,
    pub slider_unit: String,
    pub slider_extremity_semantic: String,
    /// Raw value with unit suffix, e.g. `"150m"`.
    pub helm_value: String,
    pub helm_values_path: HelmValuesPath,
    pub description: String,
    pub is_readonly: bool,
}

/// One bound of a merged range slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeEnd {
    pub is_readonly: bool,
    pub helm_values_path: HelmValuesPath,
    pub value: f64,
    pub range_end_semantic: String,
    pub min: f64,
    pub max: f64,
    pub description: String,
}

/// Dual-ended slider bound to a request/limit pair of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSlider {
    pub title: String,
    pub unit: String,
    pub step: f64,
    pub low_end_range: RangeEnd,
    pub high_end_range: RangeEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SliderExtremity::Down).unwrap(),
            "\"down\""
        );
        let up: SliderExtremity = serde_json::from_str("\"up\"").unwrap();
        assert_eq!(up, SliderExtremity::Up);
        assert_eq!(up.to_string(), "up");
    }

    #[test]
    fn range_slider_uses_camel_case_keys() {
        let end = RangeEnd {
            is_readonly: false,
            helm_values_path: vec!["resources".into(), "requests".into(), "cpu".into()],
            value: 150.0,
            range_end_semantic: "guaranteed".into(),
            min: 50.0,
            max: 40000.0,
            description: "CPU request".into(),
        };
        let slider = RangeSlider {
            title: "CPU".into(),
            unit: "m".into(),
            step: 50.0,
            low_end_range: end.clone(),
            high_end_range: end,
        };

        let value = serde_json::to_value(&slider).unwrap();
        assert_eq!(value["lowEndRange"]["rangeEndSemantic"], "guaranteed");
        assert_eq!(value["highEndRange"]["isReadonly"], false);
        assert!(value.get("low_end_range").is_none());
    }
}
