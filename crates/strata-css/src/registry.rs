//! The breakpoint registry.
//!
//! Holds the ordered, named set of breakpoints and the legacy cutoff. The
//! registry is populated once, before any fragment is collected, and only read
//! afterwards; compilations borrow it immutably, so one registry can back any
//! number of concurrent compilation units.

use std::collections::{BTreeMap, HashMap};

use crate::breakpoint::{Breakpoint, Condition, MediaCondition, WidthBound};
use crate::error::{CollateError, CollateResult, Identity};
use crate::predicate;

/// A registered breakpoint with its pairing resolved.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) breakpoint: Breakpoint,
    pub(crate) media: MediaCondition,
}

/// Ordered set of breakpoints plus the legacy cutoff rank.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Ascending rank order is the authoritative emission order.
    by_rank: BTreeMap<i32, Entry>,
    ranks: HashMap<String, i32>,
    cutoff_rank: i32,
}

impl Registry {
    /// Create an empty registry whose legacy output folds in every base-width
    /// breakpoint ranked at or below `cutoff_rank`.
    #[must_use]
    pub fn new(cutoff_rank: i32) -> Self {
        Self {
            by_rank: BTreeMap::new(),
            ranks: HashMap::new(),
            cutoff_rank,
        }
    }

    /// Register a breakpoint.
    ///
    /// # Errors
    ///
    /// - [`CollateError::DuplicateIdentity`] if the name or the rank is taken.
    /// - [`CollateError::DanglingPair`] if a width+hi-dpi breakpoint names a
    ///   base that is not registered yet.
    /// - [`CollateError::InvalidPair`] if that base is not a base-width breakpoint.
    pub fn register(&mut self, breakpoint: Breakpoint) -> CollateResult<()> {
        if self.ranks.contains_key(breakpoint.name()) {
            return Err(CollateError::DuplicateIdentity(Identity::Name(
                breakpoint.name().to_string(),
            )));
        }
        if let Some(holder) = self.by_rank.get(&breakpoint.rank()) {
            return Err(CollateError::DuplicateIdentity(Identity::Rank {
                rank: breakpoint.rank(),
                held_by: holder.breakpoint.name().to_string(),
            }));
        }

        let media = self.resolve_condition(&breakpoint)?;

        tracing::debug!(
            name = breakpoint.name(),
            rank = breakpoint.rank(),
            kind = %breakpoint.kind(),
            "registered breakpoint"
        );
        let _ = self
            .ranks
            .insert(breakpoint.name().to_string(), breakpoint.rank());
        let _ = self
            .by_rank
            .insert(breakpoint.rank(), Entry { breakpoint, media });
        Ok(())
    }

    fn resolve_condition(&self, breakpoint: &Breakpoint) -> CollateResult<MediaCondition> {
        match breakpoint.condition() {
            Condition::Width(bound) => Ok(MediaCondition::Width(*bound)),
            Condition::HiDpi => Ok(MediaCondition::HiDpi),
            Condition::PairedHiDpi { paired_with } => {
                let base = self
                    .entry(paired_with)
                    .ok_or_else(|| CollateError::DanglingPair {
                        name: breakpoint.name().to_string(),
                        paired_with: paired_with.clone(),
                    })?;
                match base.media {
                    MediaCondition::Width(bound) => Ok(MediaCondition::WidthHiDpi(bound)),
                    MediaCondition::HiDpi | MediaCondition::WidthHiDpi(_) => {
                        Err(CollateError::InvalidPair {
                            name: breakpoint.name().to_string(),
                            paired_with: paired_with.clone(),
                        })
                    }
                }
            }
        }
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.ranks
            .get(name)
            .and_then(|rank| self.by_rank.get(rank))
    }

    /// Look a breakpoint up by name.
    ///
    /// # Errors
    ///
    /// Returns [`CollateError::UnknownBreakpoint`] if nothing is registered under `name`.
    pub fn resolve(&self, name: &str) -> CollateResult<&Breakpoint> {
        self.entry(name)
            .map(|entry| &entry.breakpoint)
            .ok_or_else(|| CollateError::UnknownBreakpoint(name.to_string()))
    }

    /// The resolved media condition for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CollateError::UnknownBreakpoint`] if nothing is registered under `name`.
    pub fn media_condition(&self, name: &str) -> CollateResult<MediaCondition> {
        self.entry(name)
            .map(|entry| entry.media)
            .ok_or_else(|| CollateError::UnknownBreakpoint(name.to_string()))
    }

    /// The rendered predicate for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CollateError::UnknownBreakpoint`] if nothing is registered under `name`.
    pub fn predicate(&self, name: &str) -> CollateResult<String> {
        self.media_condition(name).map(predicate::render)
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ranks.contains_key(name)
    }

    /// Every breakpoint in ascending rank order.
    pub fn ordered_all(&self) -> impl ExactSizeIterator<Item = &Breakpoint> {
        self.by_rank.values().map(|entry| &entry.breakpoint)
    }

    /// The breakpoints folded into legacy output, in ascending rank order.
    ///
    /// Hi-dpi and width+hi-dpi breakpoints are never eligible, whatever their rank.
    pub fn legacy_eligible(&self) -> impl Iterator<Item = &Breakpoint> {
        self.ordered_all().filter(|bp| self.is_legacy_eligible(bp))
    }

    /// Whether `breakpoint` is folded into legacy output under this registry's cutoff.
    ///
    /// A `max-width` ceiling is always folded in; other base-width breakpoints
    /// only up to the cutoff rank.
    #[must_use]
    pub fn is_legacy_eligible(&self, breakpoint: &Breakpoint) -> bool {
        match breakpoint.condition() {
            Condition::Width(WidthBound::MaxWidth(_)) => true,
            Condition::Width(WidthBound::MinWidth(_)) => breakpoint.rank() <= self.cutoff_rank,
            Condition::HiDpi | Condition::PairedHiDpi { .. } => false,
        }
    }

    /// The highest rank folded into legacy output.
    #[must_use]
    pub const fn cutoff_rank(&self) -> i32 {
        self.cutoff_rank
    }

    /// Move the legacy cutoff. Only meaningful before the registry is shared.
    pub const fn set_cutoff_rank(&mut self, cutoff_rank: i32) {
        self.cutoff_rank = cutoff_rank;
    }

    /// Number of registered breakpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_rank.len()
    }

    /// Whether no breakpoint is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_rank.is_empty()
    }

    /// Breakpoints with their resolved conditions, in rank order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.by_rank.values()
    }
}
