//! Integration tests for rule collection.

use strata_common::warning::{has_warned, set_quiet};
use strata_css::{Breakpoint, CollateError, Collector, Registry, RuleFragment};

fn registry() -> Registry {
    let mut registry = Registry::new(2);
    registry.register(Breakpoint::min_width("320up", 1, 320)).unwrap();
    registry.register(Breakpoint::min_width("768up", 2, 768)).unwrap();
    registry
}

fn texts(collector: &Collector<'_>, name: Option<&str>) -> Vec<String> {
    collector
        .bucket_for(name)
        .iter()
        .map(|fragment| fragment.text().to_string())
        .collect()
}

#[test]
fn test_sequence_is_per_bucket() {
    let registry = registry();
    let mut collector = Collector::new(&registry);
    collector.submit(RuleFragment::at("a", "768up", "a768")).unwrap();
    collector.submit(RuleFragment::universal("a", "a")).unwrap();
    collector.submit(RuleFragment::at("b", "768up", "b768")).unwrap();
    collector.submit(RuleFragment::at("b", "320up", "b320")).unwrap();

    let bucket = collector.bucket_for(Some("768up"));
    assert_eq!(bucket.len(), 2);
    assert_eq!(bucket[0].sequence(), 0);
    assert_eq!(bucket[1].sequence(), 1);
    assert_eq!(bucket[1].position(), 2);

    assert_eq!(collector.bucket_for(Some("320up"))[0].sequence(), 0);
    assert_eq!(collector.bucket_for(None)[0].sequence(), 0);
    assert_eq!(collector.len(), 4);
}

#[test]
fn test_bucket_keeps_submission_order() {
    let registry = registry();
    let mut collector = Collector::new(&registry);
    for text in ["first", "second", "third"] {
        collector.submit(RuleFragment::at("c", "320up", text)).unwrap();
    }
    assert_eq!(texts(&collector, Some("320up")), vec!["first", "second", "third"]);
}

#[test]
fn test_unknown_breakpoint_rejected_and_not_recorded() {
    let registry = registry();
    let mut collector = Collector::new(&registry);
    let err = collector
        .submit(RuleFragment::at("nav", "1024up", ".nav {}"))
        .unwrap_err();
    assert_eq!(err, CollateError::UnknownBreakpoint("1024up".to_string()));
    assert!(collector.is_empty());
    assert!(collector.bucket_for(Some("1024up")).is_empty());
}

#[test]
fn test_untouched_bucket_is_empty() {
    let registry = registry();
    let collector = Collector::new(&registry);
    assert!(collector.bucket_for(None).is_empty());
    assert!(collector.bucket_for(Some("768up")).is_empty());
}

#[test]
fn test_components_in_first_seen_order() {
    let registry = registry();
    let mut collector = Collector::new(&registry);
    collector.submit(RuleFragment::at("header", "768up", "h")).unwrap();
    collector.submit(RuleFragment::universal("nav", "n")).unwrap();
    collector.submit(RuleFragment::universal("header", "h2")).unwrap();
    collector.submit(RuleFragment::at("footer", "320up", "f")).unwrap();
    assert_eq!(collector.components(), vec!["header", "nav", "footer"]);
}

#[test]
fn test_in_submission_order_spans_buckets() {
    let registry = registry();
    let mut collector = Collector::new(&registry);
    collector.submit(RuleFragment::at("x", "768up", "1")).unwrap();
    collector.submit(RuleFragment::universal("x", "2")).unwrap();
    collector.submit(RuleFragment::at("x", "320up", "3")).unwrap();
    let order: Vec<&str> = collector
        .in_submission_order()
        .into_iter()
        .map(|fragment| fragment.text())
        .collect();
    assert_eq!(order, vec!["1", "2", "3"]);
}

#[test]
fn test_blank_fragment_is_kept_and_warned() {
    set_quiet(true);
    let registry = registry();
    let mut collector = Collector::new(&registry);
    collector.submit(RuleFragment::at("ghost", "320up", "   ")).unwrap();
    assert_eq!(collector.bucket_for(Some("320up")).len(), 1);
    assert!(has_warned(
        "collect",
        "component `ghost` submitted a blank fragment for `320up`"
    ));
}

#[test]
fn test_fresh_collector_has_no_memory() {
    let registry = registry();
    {
        let mut first = Collector::new(&registry);
        first.submit(RuleFragment::universal("a", "a")).unwrap();
    }
    let second = Collector::new(&registry);
    assert!(second.is_empty());
}
