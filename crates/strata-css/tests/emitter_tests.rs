//! Integration tests for stylesheet emission.

use strata_css::{BlockTarget, MediaCondition, OutputBlock, WidthBound, emit_legacy, emit_modern};

fn universal(body: &str) -> OutputBlock {
    OutputBlock {
        target: BlockTarget::Universal,
        body: body.to_string(),
        components: vec!["test".to_string()],
        fragment_count: 1,
    }
}

fn at(name: &str, rank: i32, px: u32, body: &str) -> OutputBlock {
    OutputBlock {
        target: BlockTarget::Breakpoint {
            name: name.to_string(),
            rank,
            media: MediaCondition::Width(WidthBound::MinWidth(px)),
        },
        body: body.to_string(),
        components: vec!["test".to_string()],
        fragment_count: 1,
    }
}

#[test]
fn test_emit_nothing() {
    assert_eq!(emit_modern(&[]), "");
    assert_eq!(emit_legacy(&[]), "");
}

#[test]
fn test_modern_wraps_breakpoint_blocks() {
    let blocks = [universal("body { margin: 0; }"), at("320up", 1, 320, "p { x: 1; }")];
    assert_eq!(
        emit_modern(&blocks),
        "body { margin: 0; }\n\n@media only screen and (min-width: 320px) {\np { x: 1; }\n}"
    );
}

#[test]
fn test_modern_separates_blocks_with_blank_line() {
    let blocks = [at("320up", 1, 320, "a"), at("768up", 2, 768, "b")];
    assert_eq!(
        emit_modern(&blocks),
        "@media only screen and (min-width: 320px) {\na\n}\n\n\
@media only screen and (min-width: 768px) {\nb\n}"
    );
}

#[test]
fn test_legacy_has_no_wrappers() {
    let blocks = [universal("u"), at("320up", 1, 320, "b"), at("768up", 2, 768, "c")];
    let legacy = emit_legacy(&blocks);
    assert_eq!(legacy, "u\nb\nc");
    assert!(!legacy.contains("@media"));
}

#[test]
fn test_emitter_uses_block_order_verbatim() {
    // Emission never re-sorts; ordering is the collation engine's job.
    let blocks = [at("768up", 2, 768, "c"), at("320up", 1, 320, "b")];
    assert_eq!(emit_legacy(&blocks), "c\nb");
}
