//! Read-only statistics over a form tree.

use serde::Serialize;

use crate::form::{FormField, FormFieldGroupLike, TemporaryRangeSlider};

/// Node counts and depth of a form tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub groups: usize,
    pub temporary_sliders: usize,
    pub range_sliders: usize,
    pub other_fields: usize,
    /// Deepest nesting level; a lone root node has depth 1.
    pub max_depth: usize,
}

impl TreeStats {
    pub fn collect(root: &FormFieldGroupLike) -> Self {
        Self::collect_forest(std::slice::from_ref(root))
    }

    pub fn collect_forest(nodes: &[FormFieldGroupLike]) -> Self {
        let mut stats = Self::default();
        for node in nodes {
            stats.walk(node, 1);
        }
        stats
    }

    pub fn fields(&self) -> usize {
        self.temporary_sliders + self.range_sliders + self.other_fields
    }

    fn walk(&mut self, node: &FormFieldGroupLike, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        match node {
            FormFieldGroupLike::Group(group) => {
                self.groups += 1;
                for child in &group.children {
                    self.walk(child, depth + 1);
                }
            }
            FormFieldGroupLike::Field(FormField::TemporaryRangeSlider(_)) => {
                self.temporary_sliders += 1;
            }
            FormFieldGroupLike::Field(FormField::RangeSlider(_)) => self.range_sliders += 1,
            FormFieldGroupLike::Field(_) => self.other_fields += 1,
        }
    }
}

/// A temporary slider still present in the tree, with the segments of the
/// groups enclosing it.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderLocation<'a> {
    pub group_path: Vec<&'a str>,
    pub slider: &'a TemporaryRangeSlider,
}

/// Every temporary slider under `nodes`, in depth-first order.
pub fn temporary_sliders(nodes: &[FormFieldGroupLike]) -> Vec<SliderLocation<'_>> {
    fn walk<'a>(
        node: &'a FormFieldGroupLike,
        path: &mut Vec<&'a str>,
        out: &mut Vec<SliderLocation<'a>>,
    ) {
        match node {
            FormFieldGroupLike::Group(group) => {
                path.push(&group.helm_values_path_segment);
                for child in &group.children {
                    walk(child, path, out);
                }
                path.pop();
            }
            FormFieldGroupLike::Field(FormField::TemporaryRangeSlider(slider)) => {
                out.push(SliderLocation {
                    group_path: path.clone(),
                    slider,
                });
            }
            FormFieldGroupLike::Field(_) => {}
        }
    }

    let mut out = Vec::new();
    let mut path = Vec::new();
    for node in nodes {
        walk(node, &mut path, &mut out);
    }
    out
}
