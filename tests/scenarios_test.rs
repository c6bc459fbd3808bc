//! End-to-end probing scenarios through the public API.

use mqprobe::catalogue::{Catalogue, FeatureDescriptor, ReductionMode};
use mqprobe::domain::DomainValue;
use mqprobe::probe::{probe, Evaluator};
use mqprobe::render::MockPresenter;
use mqprobe::scheduler::{Clock, ManualClock, PollScheduler, ProbeSession};
use std::time::Duration;

fn enumeration() -> FeatureDescriptor {
    FeatureDescriptor::new(
        "(value: {value})",
        ReductionMode::Enumeration,
        vec!["none".into(), "hover".into()],
    )
    .unwrap()
}

fn range() -> FeatureDescriptor {
    FeatureDescriptor::new(
        "(value: {value})",
        ReductionMode::Range,
        (1..=5).map(DomainValue::Integer).collect(),
    )
    .unwrap()
}

fn matching(values: &'static [&'static str]) -> impl Fn(&str) -> bool {
    move |query: &str| values.iter().any(|v| query == format!("(value: {})", v))
}

#[test]
fn enumeration_lists_matching_value() {
    let descriptor = enumeration();
    let result = probe(&descriptor, &matching(&["hover"]));

    assert_eq!(result.matched_labels(), vec!["hover"]);
    assert_eq!(result.reduce().unwrap().matched, "hover");
}

#[test]
fn enumeration_without_match_emits_no_row() {
    let mut session = ProbeSession::new(Catalogue::new(vec![enumeration()]));
    let mut presenter = MockPresenter::new();
    let mut evaluator = matching(&[]);

    session.run_cycle(&mut evaluator, &mut presenter).unwrap();

    assert_eq!(presenter.last_render().map(<[_]>::len), Some(0));
}

#[test]
fn contiguous_range_is_summarized_by_bounds() {
    let descriptor = range();
    let result = probe(&descriptor, &matching(&["2", "3", "4"]));

    let reduction = result.reduce().unwrap();
    assert_eq!(reduction.matched, "2 to 4");
    assert_eq!(reduction.domain, "1 to 5");
}

#[test]
fn range_with_gap_spans_the_gap() {
    let descriptor = range();
    let result = probe(&descriptor, &matching(&["2", "4"]));

    assert_eq!(result.matched_labels(), vec!["2", "4"]);
    assert_eq!(result.reduce().unwrap().matched, "2 to 4");
}

#[test]
fn reduction_is_stable_for_identical_input() {
    let descriptor = range();
    let evaluator = matching(&["1", "2"]);

    let first = probe(&descriptor, &evaluator).reduce();
    let second = probe(&descriptor, &evaluator).reduce();
    assert_eq!(first, second);
}

/// Evaluator reading a shared "current environment" that tests change
/// between cycles.
struct Environment<'a> {
    current: &'a std::cell::Cell<&'static str>,
    seen: &'static str,
}

impl Evaluator for Environment<'_> {
    fn evaluate(&self, query: &str) -> bool {
        query == format!("(value: {})", self.seen)
    }

    fn begin_cycle(&mut self) {
        self.seen = self.current.get();
    }
}

#[test]
fn watch_loop_renders_only_on_change() {
    let current = std::cell::Cell::new("none");
    let clock = ManualClock::new();
    let mut scheduler = PollScheduler::new(
        ProbeSession::new(Catalogue::new(vec![enumeration()])),
        &clock,
    );
    let mut presenter = MockPresenter::new();
    let mut evaluator = Environment {
        current: &current,
        seen: "",
    };

    for _ in 0..3 {
        scheduler.run(&mut evaluator, &mut presenter, Some(1)).unwrap();
    }
    current.set("hover");
    for _ in 0..2 {
        scheduler.run(&mut evaluator, &mut presenter, Some(1)).unwrap();
    }

    assert_eq!(scheduler.cycles(), 5);
    assert_eq!(clock.now(), Duration::from_millis(4000));
    let summaries: Vec<_> = presenter
        .renders()
        .iter()
        .map(|rows| rows[0].matched_summary.as_str())
        .collect();
    assert_eq!(summaries, vec!["none", "hover"]);
}
