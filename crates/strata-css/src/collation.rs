//! Collation: turning buckets into an ordered list of output blocks.
//!
//! Block order is decided by breakpoint rank alone. The order fragments were
//! submitted across *different* breakpoints never matters; the order within one
//! bucket always does and is never changed. Authors who rely on cascade
//! precedence between breakpoints must author in rank order (see
//! [`crate::compiler::CascadeInversion`]).

use serde::{Deserialize, Serialize};

use crate::breakpoint::MediaCondition;
use crate::collector::{Collector, SequencedFragment};

/// Which stylesheet is being produced.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Grouped `@media` blocks for every breakpoint, in rank order.
    Modern,
    /// Predicate-free "desktop" rendering for browsers without media queries.
    Legacy,
}

/// What an output block applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum BlockTarget {
    /// Rules that apply everywhere.
    Universal,
    /// Rules scoped to one breakpoint.
    Breakpoint {
        /// Breakpoint name.
        name: String,
        /// Breakpoint rank.
        rank: i32,
        /// Resolved condition the emitter renders the predicate from.
        media: MediaCondition,
    },
}

/// One collated block: every fragment of a single bucket, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputBlock {
    /// What the block applies to.
    pub target: BlockTarget,
    /// Fragment texts in submission order, joined by newlines.
    pub body: String,
    /// Contributing components, in the order each first contributed.
    pub components: Vec<String>,
    /// Number of fragments folded into `body`.
    pub fragment_count: usize,
}

impl OutputBlock {
    fn from_bucket(target: BlockTarget, fragments: &[SequencedFragment]) -> Self {
        let mut components: Vec<String> = Vec::new();
        for fragment in fragments {
            if !components.iter().any(|seen| seen == fragment.component()) {
                components.push(fragment.component().to_string());
            }
        }
        Self {
            target,
            body: fragments
                .iter()
                .map(SequencedFragment::text)
                .collect::<Vec<_>>()
                .join("\n"),
            components,
            fragment_count: fragments.len(),
        }
    }

    /// Whether this is the universal block.
    #[must_use]
    pub const fn is_universal(&self) -> bool {
        matches!(self.target, BlockTarget::Universal)
    }

    /// The breakpoint name, or `None` for the universal block.
    #[must_use]
    pub fn breakpoint(&self) -> Option<&str> {
        match &self.target {
            BlockTarget::Universal => None,
            BlockTarget::Breakpoint { name, .. } => Some(name),
        }
    }
}

/// Build the block list for `mode` from the collector and its registry.
///
/// The universal block comes first when it has fragments; after it, one block
/// per non-empty bucket in ascending rank order. In legacy mode only
/// legacy-eligible breakpoints take part.
#[must_use]
pub fn collate(collector: &Collector<'_>, mode: Mode) -> Vec<OutputBlock> {
    let registry = collector.registry();
    let mut blocks = Vec::new();

    let universal = collector.bucket_for(None);
    if !universal.is_empty() {
        blocks.push(OutputBlock::from_bucket(BlockTarget::Universal, universal));
    }

    for entry in registry.entries() {
        let breakpoint = &entry.breakpoint;
        if mode == Mode::Legacy && !registry.is_legacy_eligible(breakpoint) {
            continue;
        }
        let bucket = collector.bucket_for(Some(breakpoint.name()));
        if bucket.is_empty() {
            continue;
        }
        let target = BlockTarget::Breakpoint {
            name: breakpoint.name().to_string(),
            rank: breakpoint.rank(),
            media: entry.media,
        };
        blocks.push(OutputBlock::from_bucket(target, bucket));
    }

    tracing::debug!(%mode, blocks = blocks.len(), "collated blocks");
    blocks
}
