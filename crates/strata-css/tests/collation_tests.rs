//! Integration tests for the collation engine.

use strata_css::{
    BlockTarget, Breakpoint, Collector, MediaCondition, Mode, Registry, RuleFragment, WidthBound,
    collate,
};

fn registry() -> Registry {
    let mut registry = Registry::new(768);
    registry.register(Breakpoint::max_width("mobile", 0, 767)).unwrap();
    registry.register(Breakpoint::min_width("320up", 1, 320)).unwrap();
    registry.register(Breakpoint::min_width("768up", 2, 768)).unwrap();
    registry.register(Breakpoint::hi_dpi("all2x", 3)).unwrap();
    registry
        .register(Breakpoint::paired_hi_dpi("768up2x", 4, "768up"))
        .unwrap();
    registry
}

fn block_names(collector: &Collector<'_>, mode: Mode) -> Vec<Option<String>> {
    collate(collector, mode)
        .iter()
        .map(|block| block.breakpoint().map(str::to_string))
        .collect()
}

#[test]
fn test_empty_collector_yields_no_blocks() {
    let registry = registry();
    let collector = Collector::new(&registry);
    assert!(collate(&collector, Mode::Modern).is_empty());
    assert!(collate(&collector, Mode::Legacy).is_empty());
}

#[test]
fn test_universal_block_first() {
    let registry = registry();
    let mut collector = Collector::new(&registry);
    collector.submit(RuleFragment::at("a", "mobile", "m")).unwrap();
    collector.submit(RuleFragment::universal("a", "u")).unwrap();

    let blocks = collate(&collector, Mode::Modern);
    assert!(blocks[0].is_universal());
    assert_eq!(blocks[0].body, "u");
    assert_eq!(blocks[1].breakpoint(), Some("mobile"));
}

#[test]
fn test_modern_blocks_follow_rank() {
    let registry = registry();
    let mut collector = Collector::new(&registry);
    collector.submit(RuleFragment::at("a", "768up2x", "e")).unwrap();
    collector.submit(RuleFragment::at("a", "all2x", "d")).unwrap();
    collector.submit(RuleFragment::at("a", "768up", "c")).unwrap();
    collector.submit(RuleFragment::at("a", "320up", "b")).unwrap();

    assert_eq!(
        block_names(&collector, Mode::Modern),
        vec![
            Some("320up".to_string()),
            Some("768up".to_string()),
            Some("all2x".to_string()),
            Some("768up2x".to_string()),
        ]
    );
}

#[test]
fn test_empty_buckets_are_skipped() {
    let registry = registry();
    let mut collector = Collector::new(&registry);
    collector.submit(RuleFragment::at("a", "768up", "c")).unwrap();
    assert_eq!(
        block_names(&collector, Mode::Modern),
        vec![Some("768up".to_string())]
    );
}

#[test]
fn test_legacy_blocks_exclude_dpi_and_keep_mobile() {
    let registry = registry();
    let mut collector = Collector::new(&registry);
    collector.submit(RuleFragment::universal("a", "u")).unwrap();
    collector.submit(RuleFragment::at("a", "mobile", "m")).unwrap();
    collector.submit(RuleFragment::at("a", "all2x", "d")).unwrap();
    collector.submit(RuleFragment::at("a", "768up2x", "e")).unwrap();
    collector.submit(RuleFragment::at("a", "768up", "c")).unwrap();

    assert_eq!(
        block_names(&collector, Mode::Legacy),
        vec![None, Some("mobile".to_string()), Some("768up".to_string())]
    );
}

#[test]
fn test_legacy_cutoff_drops_higher_ranks() {
    let mut registry = registry();
    registry.set_cutoff_rank(1);
    let mut collector = Collector::new(&registry);
    collector.submit(RuleFragment::at("a", "768up", "c")).unwrap();
    collector.submit(RuleFragment::at("a", "320up", "b")).unwrap();
    assert_eq!(
        block_names(&collector, Mode::Legacy),
        vec![Some("320up".to_string())]
    );
}

#[test]
fn test_block_body_keeps_submission_order_across_components() {
    let registry = registry();
    let mut collector = Collector::new(&registry);
    collector.submit(RuleFragment::at("nav", "768up", ".nav{}")).unwrap();
    collector.submit(RuleFragment::at("hero", "768up", ".hero{}")).unwrap();
    collector.submit(RuleFragment::at("nav", "768up", ".nav a{}")).unwrap();

    let blocks = collate(&collector, Mode::Modern);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].body, ".nav{}\n.hero{}\n.nav a{}");
    assert_eq!(blocks[0].components, vec!["nav", "hero"]);
    assert_eq!(blocks[0].fragment_count, 3);
}

#[test]
fn test_block_target_carries_media() {
    let registry = registry();
    let mut collector = Collector::new(&registry);
    collector.submit(RuleFragment::at("a", "768up2x", "e")).unwrap();
    let blocks = collate(&collector, Mode::Modern);
    assert_eq!(
        blocks[0].target,
        BlockTarget::Breakpoint {
            name: "768up2x".to_string(),
            rank: 4,
            media: MediaCondition::WidthHiDpi(WidthBound::MinWidth(768)),
        }
    );
}
