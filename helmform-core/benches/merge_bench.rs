//! Criterion benchmarks for the merge pass.
//!
//! Benchmarks:
//! 1. Wide form: one group with many sibling pairs
//! 2. Deep form: pairs spread over nested groups
//! 3. Numeric-prefix parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use helmform_core::form::{
    FormField, FormFieldGroup, FormFieldGroupLike, SliderExtremity, TemporaryRangeSlider,
};
use helmform_core::{merge_range_sliders, parse_numeric_prefix};

// ── Helpers ──────────────────────────────────────────────────────────

fn endpoint(id: usize, extremity: SliderExtremity) -> FormFieldGroupLike {
    FormField::TemporaryRangeSlider(TemporaryRangeSlider {
        title: Some(format!("range {id}")),
        slider_range_id: format!("r{id}"),
        slider_extremity: extremity,
        slider_min: 50.0,
        slider_max: 40000.0,
        slider_step: 50.0,
        slider_unit: "m".into(),
        slider_extremity_semantic: extremity.to_string(),
        helm_value: format!("{}m", 100 + id),
        helm_values_path: vec!["resources".into(), format!("r{id}")],
        description: String::new(),
        is_readonly: false,
    })
    .into()
}

fn wide_form(pairs: usize) -> FormFieldGroupLike {
    let children = (0..pairs)
        .flat_map(|id| [endpoint(id, SliderExtremity::Down), endpoint(id, SliderExtremity::Up)])
        .collect();
    FormFieldGroup::new("resources", children).into()
}

fn deep_form(depth: usize) -> FormFieldGroupLike {
    (0..depth).fold(wide_form(2), |inner, level| {
        FormFieldGroup::new(
            format!("level{level}"),
            vec![
                endpoint(level, SliderExtremity::Down),
                inner,
                endpoint(level, SliderExtremity::Up),
            ],
        )
        .into()
    })
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_wide");
    for pairs in [10, 100, 1000] {
        let form = wide_form(pairs);
        group.bench_with_input(BenchmarkId::from_parameter(pairs), &form, |b, form| {
            b.iter(|| {
                let mut tree = form.clone();
                merge_range_sliders(black_box(&mut tree)).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_deep");
    for depth in [8, 64] {
        let form = deep_form(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &form, |b, form| {
            b.iter(|| {
                let mut tree = form.clone();
                merge_range_sliders(black_box(&mut tree)).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_numeric_prefix", |b| {
        b.iter(|| parse_numeric_prefix(black_box("30000m"), black_box("m")))
    });
}

criterion_group!(benches, bench_wide, bench_deep, bench_parse);
criterion_main!(benches);
