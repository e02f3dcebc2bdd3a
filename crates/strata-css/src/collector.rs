//! Rule collection.
//!
//! Fragments arrive from the authoring layer one at a time, component by
//! component. The collector files each into the bucket of the breakpoint it
//! names and remembers the order it arrived in. Breakpoint names are checked
//! against the bound registry on the spot: a rule for an unknown breakpoint
//! fails the submission instead of silently disappearing from the output.

use std::collections::HashMap;

use strata_common::warning::warn_once;

use crate::error::{CollateError, CollateResult};
use crate::registry::Registry;

/// A block of opaque rule text contributed by a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFragment {
    /// Grouping label; informational only.
    pub component: String,
    /// Target breakpoint, or `None` for rules that apply everywhere.
    pub breakpoint: Option<String>,
    /// The rule text, emitted verbatim.
    pub text: String,
}

impl RuleFragment {
    /// A fragment that applies in every mode, unconditionally.
    #[must_use]
    pub fn universal(component: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            breakpoint: None,
            text: text.into(),
        }
    }

    /// A fragment scoped to the breakpoint called `breakpoint`.
    #[must_use]
    pub fn at(
        component: impl Into<String>,
        breakpoint: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            breakpoint: Some(breakpoint.into()),
            text: text.into(),
        }
    }
}

/// A fragment as filed by the collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedFragment {
    fragment: RuleFragment,
    sequence: usize,
    position: usize,
}

impl SequencedFragment {
    /// The submitted fragment.
    #[must_use]
    pub const fn fragment(&self) -> &RuleFragment {
        &self.fragment
    }

    /// Index within its bucket.
    #[must_use]
    pub const fn sequence(&self) -> usize {
        self.sequence
    }

    /// Index across every submission to the collector.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Shorthand for the fragment's rule text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.fragment.text
    }

    /// Shorthand for the fragment's component id.
    #[must_use]
    pub fn component(&self) -> &str {
        &self.fragment.component
    }
}

/// Per-compilation store of fragments, bucketed by breakpoint.
///
/// Each compilation unit starts from an empty collector; nothing carries over.
#[derive(Debug, Clone)]
pub struct Collector<'r> {
    registry: &'r Registry,
    universal: Vec<SequencedFragment>,
    buckets: HashMap<String, Vec<SequencedFragment>>,
    submitted: usize,
}

impl<'r> Collector<'r> {
    /// Create an empty collector bound to `registry`.
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            universal: Vec::new(),
            buckets: HashMap::new(),
            submitted: 0,
        }
    }

    /// The registry fragments are validated against.
    #[must_use]
    pub const fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Append `fragment` to its bucket.
    ///
    /// # Errors
    ///
    /// Returns [`CollateError::UnknownBreakpoint`] if the fragment names a
    /// breakpoint the bound registry does not know. Nothing is recorded in
    /// that case.
    pub fn submit(&mut self, fragment: RuleFragment) -> CollateResult<()> {
        self.check(&fragment)?;

        if fragment.text.trim().is_empty() {
            warn_once(
                "collect",
                &format!(
                    "component `{}` submitted a blank fragment for `{}`",
                    fragment.component,
                    fragment.breakpoint.as_deref().unwrap_or("universal")
                ),
            );
        }

        let bucket = match &fragment.breakpoint {
            None => &mut self.universal,
            Some(name) => self.buckets.entry(name.clone()).or_default(),
        };
        let sequence = bucket.len();
        tracing::trace!(
            component = %fragment.component,
            breakpoint = fragment.breakpoint.as_deref().unwrap_or("universal"),
            sequence,
            "collected fragment"
        );
        bucket.push(SequencedFragment {
            fragment,
            sequence,
            position: self.submitted,
        });
        self.submitted += 1;
        Ok(())
    }

    /// Validate a fragment against the bound registry without recording it.
    ///
    /// # Errors
    ///
    /// Returns [`CollateError::UnknownBreakpoint`] for an unregistered breakpoint name.
    pub fn check(&self, fragment: &RuleFragment) -> CollateResult<()> {
        match &fragment.breakpoint {
            Some(name) if !self.registry.contains(name) => {
                Err(CollateError::UnknownBreakpoint(name.clone()))
            }
            _ => Ok(()),
        }
    }

    /// The fragments filed under `name` (`None` for universal), in submission order.
    ///
    /// Empty if nothing was ever submitted there.
    #[must_use]
    pub fn bucket_for(&self, name: Option<&str>) -> &[SequencedFragment] {
        match name {
            None => &self.universal,
            Some(name) => self.buckets.get(name).map_or(&[][..], Vec::as_slice),
        }
    }

    /// Total number of fragments submitted.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.submitted
    }

    /// Whether nothing has been submitted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.submitted == 0
    }

    /// Every fragment, in global submission order.
    #[must_use]
    pub fn in_submission_order(&self) -> Vec<&SequencedFragment> {
        let mut all: Vec<&SequencedFragment> = self
            .universal
            .iter()
            .chain(self.buckets.values().flatten())
            .collect();
        all.sort_by_key(|fragment| fragment.position);
        all
    }

    /// Distinct component ids, in the order each first contributed.
    #[must_use]
    pub fn components(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for fragment in self.in_submission_order() {
            if !seen.contains(&fragment.component()) {
                seen.push(fragment.component());
            }
        }
        seen
    }
}
