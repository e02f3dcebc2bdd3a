//! Property tests for ordering and elision guarantees.

use quickcheck_macros::quickcheck;
use strata_css::{Breakpoint, Compiler, Registry, RuleFragment};

const TARGETS: [Option<&str>; 5] = [
    None,
    Some("320up"),
    Some("768up"),
    Some("all2x"),
    Some("768up2x"),
];

fn registry() -> Registry {
    let mut registry = Registry::new(768);
    registry.register(Breakpoint::min_width("320up", 1, 320)).unwrap();
    registry.register(Breakpoint::min_width("768up", 2, 768)).unwrap();
    registry.register(Breakpoint::hi_dpi("all2x", 3)).unwrap();
    registry
        .register(Breakpoint::paired_hi_dpi("768up2x", 4, "768up"))
        .unwrap();
    registry
}

fn fragment(target: Option<&str>, index: usize) -> RuleFragment {
    let text = format!(".{}-{index} {{}}", target.unwrap_or("all"));
    match target {
        None => RuleFragment::universal("prop", text),
        Some(name) => RuleFragment::at("prop", name, text),
    }
}

/// Two fragments per target, each bucket's pair kept in order, buckets
/// interleaved according to `choices`.
fn interleaved(choices: &[u8]) -> Vec<RuleFragment> {
    let mut queues: Vec<Vec<RuleFragment>> = TARGETS
        .iter()
        .map(|&target| vec![fragment(target, 1), fragment(target, 0)])
        .collect();
    let mut out = Vec::new();
    let mut choices = choices.iter().copied().cycle();
    while queues.iter().any(|queue| !queue.is_empty()) {
        let live: Vec<usize> = (0..queues.len()).filter(|&i| !queues[i].is_empty()).collect();
        let pick = choices.next().map_or(0, usize::from) % live.len();
        if let Some(next) = queues[live[pick]].pop() {
            out.push(next);
        }
    }
    out
}

fn compile(fragments: Vec<RuleFragment>) -> (String, String) {
    let registry = registry();
    let mut compiler = Compiler::new(&registry);
    for fragment in fragments {
        compiler.submit(fragment).unwrap();
    }
    (compiler.compile_modern(), compiler.compile_legacy())
}

#[quickcheck]
fn rank_order_invariance(choices: Vec<u8>) -> bool {
    let canonical: Vec<RuleFragment> = TARGETS
        .iter()
        .flat_map(|&target| [fragment(target, 0), fragment(target, 1)])
        .collect();
    compile(interleaved(&choices)) == compile(canonical)
}

#[quickcheck]
fn empty_buckets_are_elided(mask: u8) -> bool {
    let used: Vec<Option<&str>> = TARGETS
        .iter()
        .enumerate()
        .filter(|&(i, _)| mask & (1 << i) != 0)
        .map(|(_, &target)| target)
        .collect();
    let (modern, legacy) = compile(used.iter().map(|&target| fragment(target, 0)).collect());

    TARGETS.iter().all(|&target| {
        let marker = format!(".{}-0", target.unwrap_or("all"));
        let present = used.contains(&target);
        modern.contains(&marker) == present
    }) && modern.matches("@media").count() == used.iter().filter(|t| t.is_some()).count()
        && !legacy.contains("@media")
}

#[quickcheck]
fn universal_is_prefix(extra: Vec<u8>) -> bool {
    let mut fragments: Vec<RuleFragment> = extra
        .iter()
        .enumerate()
        .map(|(i, &choice)| fragment(TARGETS[1 + usize::from(choice) % 4], i))
        .collect();
    fragments.push(RuleFragment::universal("prop", "html {}"));
    let (modern, legacy) = compile(fragments);
    modern.starts_with("html {}") && legacy.starts_with("html {}")
}

#[quickcheck]
fn legacy_only_holds_eligible_breakpoints(extra: Vec<u8>) -> bool {
    let fragments: Vec<RuleFragment> = extra
        .iter()
        .enumerate()
        .map(|(i, &choice)| fragment(TARGETS[usize::from(choice) % TARGETS.len()], i))
        .collect();
    let (_, legacy) = compile(fragments);
    !legacy.contains(".all2x-") && !legacy.contains(".768up2x-")
}
