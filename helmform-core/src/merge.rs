//! Range-slider merge pass.
//!
//! The schema builder emits each request/limit pair as two temporary slider
//! leaves. This pass walks the tree depth-first and, within each children
//! list, replaces every matched `down`/`up` pair with one [`RangeSlider`].
//!
//! Pairing rules:
//! - Only direct siblings pair; sliders in different groups never merge.
//! - Per `sliderRangeId`, the first `down` pairs with the first `up`.
//! - The merged field takes the index of the earlier endpoint, the later
//!   endpoint is dropped, everything else keeps its order.
//! - A slider with no partner stays as it is.
//!
//! A group is validated completely before its children list is rewritten,
//! so a failing group is left exactly as it was.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::error::MergeError;
use crate::form::{
    FormDocument, FormField, FormFieldGroupLike, RangeEnd, RangeSlider, SliderExtremity,
    TemporaryRangeSlider,
};
use crate::units::parse_numeric_prefix;

// ─── Options and report ──────────────────────────────────────────────

/// What to do when the two endpoints of a pair disagree on unit, step or
/// bounds. The `down` endpoint's values are used in every case that merges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointAgreement {
    /// Log the disagreement and merge.
    #[default]
    Warn,
    /// Fail with [`MergeError::EndpointMismatch`].
    Strict,
    /// Merge silently.
    Ignore,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    pub endpoint_agreement: EndpointAgreement,
}

/// Summary of one merge pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub groups_visited: usize,
    pub pairs_merged: usize,
    /// Temporary sliders left in the tree because they had no partner.
    pub unpaired_sliders: usize,
    /// Range ids of merged pairs, in visit order.
    pub merged_range_ids: Vec<String>,
}

impl MergeReport {
    fn absorb(&mut self, other: MergeReport) {
        self.groups_visited += other.groups_visited;
        self.pairs_merged += other.pairs_merged;
        self.unpaired_sliders += other.unpaired_sliders;
        self.merged_range_ids.extend(other.merged_range_ids);
    }
}

// ─── Merger ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct RangeSliderMerger {
    options: MergeOptions,
}

/// A matched pair within one children list.
struct Pair<'a> {
    first: usize,
    second: usize,
    down: &'a TemporaryRangeSlider,
    up: &'a TemporaryRangeSlider,
}

impl RangeSliderMerger {
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    /// Merge every resolvable pair under `root`, in place.
    pub fn merge(&self, root: &mut FormFieldGroupLike) -> Result<MergeReport, MergeError> {
        let mut report = MergeReport::default();
        let mut path = Vec::new();
        self.visit(root, &mut path, &mut report)?;
        Ok(report)
    }

    /// Merge a list of top-level nodes. The list itself is treated as one
    /// children sequence, so top-level sliders pair with each other.
    pub fn merge_children(
        &self,
        children: &mut Vec<FormFieldGroupLike>,
    ) -> Result<MergeReport, MergeError> {
        let mut report = MergeReport::default();
        let mut path = Vec::new();
        self.merge_level(children, &mut path, &mut report)?;
        Ok(report)
    }

    /// Merge a whole document, whichever shape it has.
    pub fn merge_document(&self, doc: &mut FormDocument) -> Result<MergeReport, MergeError> {
        match doc {
            FormDocument::Forest(nodes) => self.merge_children(nodes),
            FormDocument::Node(node) => self.merge(node),
        }
    }

    fn visit(
        &self,
        node: &mut FormFieldGroupLike,
        path: &mut Vec<String>,
        report: &mut MergeReport,
    ) -> Result<(), MergeError> {
        let FormFieldGroupLike::Group(group) = node else {
            return Ok(());
        };

        path.push(group.helm_values_path_segment.clone());
        report.groups_visited += 1;
        let result = self.merge_level(&mut group.children, path, report);
        path.pop();
        result
    }

    fn merge_level(
        &self,
        children: &mut Vec<FormFieldGroupLike>,
        path: &mut Vec<String>,
        report: &mut MergeReport,
    ) -> Result<(), MergeError> {
        let level = self.merge_siblings(children, path)?;
        report.absorb(level);

        for child in children.iter_mut() {
            self.visit(child, path, report)?;
        }
        Ok(())
    }

    /// Pair and replace temporary sliders among one children list.
    fn merge_siblings(
        &self,
        children: &mut Vec<FormFieldGroupLike>,
        path: &[String],
    ) -> Result<MergeReport, MergeError> {
        let total_sliders = children
            .iter()
            .filter(|c| c.as_temporary_slider().is_some())
            .count();
        if total_sliders == 0 {
            return Ok(MergeReport::default());
        }

        let mut replacements: HashMap<usize, RangeSlider> = HashMap::new();
        let mut removed: HashSet<usize> = HashSet::new();
        let mut merged_range_ids = Vec::new();

        for pair in find_pairs(children) {
            let slider = self.build_range_slider(pair.down, pair.up, path)?;
            debug!(
                range_id = %pair.down.slider_range_id,
                group = %path.join("."),
                index = pair.first,
                "merged temporary sliders into range slider"
            );
            merged_range_ids.push(pair.down.slider_range_id.clone());
            replacements.insert(pair.first, slider);
            removed.insert(pair.second);
        }

        let pairs_merged = replacements.len();
        let unpaired_sliders = total_sliders - 2 * pairs_merged;
        if unpaired_sliders > 0 {
            debug!(
                group = %path.join("."),
                count = unpaired_sliders,
                "leaving unpaired temporary sliders in place"
            );
        }

        if pairs_merged > 0 {
            let old = std::mem::take(children);
            *children = old
                .into_iter()
                .enumerate()
                .filter_map(|(i, node)| {
                    if removed.contains(&i) {
                        None
                    } else if let Some(slider) = replacements.remove(&i) {
                        Some(FormFieldGroupLike::Field(FormField::RangeSlider(slider)))
                    } else {
                        Some(node)
                    }
                })
                .collect();
        }

        Ok(MergeReport {
            groups_visited: 0,
            pairs_merged,
            unpaired_sliders,
            merged_range_ids,
        })
    }

    fn build_range_slider(
        &self,
        down: &TemporaryRangeSlider,
        up: &TemporaryRangeSlider,
        path: &[String],
    ) -> Result<RangeSlider, MergeError> {
        self.check_agreement(down, up)?;

        let title = down
            .title
            .as_ref()
            .or(up.title.as_ref())
            .cloned()
            .ok_or_else(|| MergeError::MissingTitle {
                range_id: down.slider_range_id.clone(),
                path: path.join("."),
            })?;

        Ok(RangeSlider {
            title,
            unit: down.slider_unit.clone(),
            step: down.slider_step,
            low_end_range: range_end(down)?,
            high_end_range: range_end(up)?,
        })
    }

    fn check_agreement(
        &self,
        down: &TemporaryRangeSlider,
        up: &TemporaryRangeSlider,
    ) -> Result<(), MergeError> {
        if self.options.endpoint_agreement == EndpointAgreement::Ignore {
            return Ok(());
        }

        let properties = [
            ("unit", down.slider_unit.clone(), up.slider_unit.clone()),
            ("step", down.slider_step.to_string(), up.slider_step.to_string()),
            ("min", down.slider_min.to_string(), up.slider_min.to_string()),
            ("max", down.slider_max.to_string(), up.slider_max.to_string()),
        ];
        let mismatches = properties.into_iter().filter(|(_, d, u)| d != u);

        for (property, d, u) in mismatches {
            match self.options.endpoint_agreement {
                EndpointAgreement::Strict => {
                    return Err(MergeError::EndpointMismatch {
                        range_id: down.slider_range_id.clone(),
                        property,
                        down: d,
                        up: u,
                    });
                }
                EndpointAgreement::Warn => {
                    warn!(
                        range_id = %down.slider_range_id,
                        property,
                        down = %d,
                        up = %u,
                        "range endpoints disagree; using the down endpoint"
                    );
                }
                EndpointAgreement::Ignore => {}
            }
        }
        Ok(())
    }
}

/// Locate matched pairs among `children`, ordered by their earlier index.
fn find_pairs(children: &[FormFieldGroupLike]) -> Vec<Pair<'_>> {
    let mut slots: HashMap<&str, (Option<usize>, Option<usize>)> = HashMap::new();

    for (i, child) in children.iter().enumerate() {
        let Some(slider) = child.as_temporary_slider() else {
            continue;
        };
        let slot = slots.entry(slider.slider_range_id.as_str()).or_default();
        let end = match slider.slider_extremity {
            SliderExtremity::Down => &mut slot.0,
            SliderExtremity::Up => &mut slot.1,
        };
        end.get_or_insert(i);
    }

    let mut pairs: Vec<Pair<'_>> = slots
        .into_values()
        .filter_map(|slot| match slot {
            (Some(d), Some(u)) => Some(Pair {
                first: d.min(u),
                second: d.max(u),
                down: children[d].as_temporary_slider()?,
                up: children[u].as_temporary_slider()?,
            }),
            _ => None,
        })
        .collect();
    pairs.sort_by_key(|p| p.first);
    pairs
}

fn range_end(slider: &TemporaryRangeSlider) -> Result<RangeEnd, MergeError> {
    let value = parse_numeric_prefix(&slider.helm_value, &slider.slider_unit).map_err(|source| {
        MergeError::Value {
            range_id: slider.slider_range_id.clone(),
            extremity: slider.slider_extremity,
            source,
        }
    })?;

    Ok(RangeEnd {
        is_readonly: slider.is_readonly,
        helm_values_path: slider.helm_values_path.clone(),
        value,
        range_end_semantic: slider.slider_extremity_semantic.clone(),
        min: slider.slider_min,
        max: slider.slider_max,
        description: slider.description.clone(),
    })
}

// ─── Convenience entry points ────────────────────────────────────────

/// Merge `root` in place with default options.
pub fn merge_range_sliders(root: &mut FormFieldGroupLike) -> Result<MergeReport, MergeError> {
    RangeSliderMerger::default().merge(root)
}

/// Return a merged copy of `root`. The input is never modified, even when
/// the merge fails part-way.
pub fn merged_range_sliders(root: &FormFieldGroupLike) -> Result<FormFieldGroupLike, MergeError> {
    let mut copy = root.clone();
    merge_range_sliders(&mut copy)?;
    Ok(copy)
}
