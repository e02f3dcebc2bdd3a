//! The compiler front door.
//!
//! A [`Compiler`] is one compilation unit: a fresh collector bound to a
//! finished registry. It is cheap to create, so compile each project (or each
//! thread's share of a batch) with its own.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use crate::collation::{Mode, OutputBlock, collate};
use crate::collector::{Collector, RuleFragment};
use crate::component::Component;
use crate::emitter::{emit_legacy, emit_modern};
use crate::error::CollateResult;
use crate::registry::Registry;

/// Both stylesheets for one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stylesheets {
    /// Grouped media-query output.
    pub modern: String,
    /// Flattened desktop output.
    pub legacy: String,
}

/// A component authored a lower-ranked rule after a higher-ranked one.
///
/// Output follows rank, so the two rules end up in the opposite order from the
/// source. Harmless unless the rules compete for the same properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeInversion {
    /// The component whose authoring order disagrees with rank order.
    pub component: String,
    /// Target written first (`None` for universal).
    pub earlier: Option<String>,
    /// Lower-ranked target written afterwards (`None` for universal).
    pub later: Option<String>,
}

impl fmt::Display for CascadeInversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let earlier = self.earlier.as_deref().unwrap_or("universal");
        let later = self.later.as_deref().unwrap_or("universal");
        write!(
            f,
            "component `{}` writes `{later}` rules after `{earlier}` rules, but `{later}` is emitted first",
            self.component
        )
    }
}

/// One compilation unit.
#[derive(Debug, Clone)]
pub struct Compiler<'r> {
    collector: Collector<'r>,
}

impl<'r> Compiler<'r> {
    /// Start an empty compilation against `registry`.
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            collector: Collector::new(registry),
        }
    }

    /// Submit a single fragment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CollateError::UnknownBreakpoint`] if the fragment names
    /// a breakpoint the registry does not know.
    pub fn submit(&mut self, fragment: RuleFragment) -> CollateResult<()> {
        self.collector.submit(fragment)
    }

    /// Submit every fragment of `component`, or none of them.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CollateError::UnknownBreakpoint`] naming the first
    /// unregistered breakpoint the component uses. The collector is left
    /// untouched in that case.
    pub fn submit_component(&mut self, component: &Component) -> CollateResult<()> {
        for fragment in component.fragments() {
            self.collector.check(&fragment)?;
        }
        for fragment in component.fragments() {
            self.collector.submit(fragment)?;
        }
        Ok(())
    }

    /// The collector holding this unit's fragments.
    #[must_use]
    pub const fn collector(&self) -> &Collector<'r> {
        &self.collector
    }

    /// The collated block list for `mode`.
    #[must_use]
    pub fn blocks(&self, mode: Mode) -> Vec<OutputBlock> {
        collate(&self.collector, mode)
    }

    /// Grouped media-query stylesheet.
    #[must_use]
    pub fn compile_modern(&self) -> String {
        emit_modern(&self.blocks(Mode::Modern))
    }

    /// Flattened stylesheet for browsers without media-query support.
    #[must_use]
    pub fn compile_legacy(&self) -> String {
        emit_legacy(&self.blocks(Mode::Legacy))
    }

    /// Both stylesheets.
    #[must_use]
    pub fn compile(&self) -> Stylesheets {
        Stylesheets {
            modern: self.compile_modern(),
            legacy: self.compile_legacy(),
        }
    }

    /// Every place a component's authoring order disagrees with rank order.
    ///
    /// Each (component, earlier, later) triple is reported once, in the order
    /// it is first detected.
    #[must_use]
    pub fn cascade_inversions(&self) -> Vec<CascadeInversion> {
        let registry = self.collector.registry();
        let rank_of = |target: Option<&str>| -> Option<i32> {
            target.and_then(|name| registry.resolve(name).ok().map(|bp| bp.rank()))
        };

        // Highest-ranked target each component has written so far.
        let mut highest: HashMap<&str, (Option<i32>, Option<&str>)> = HashMap::new();
        let mut inversions: Vec<CascadeInversion> = Vec::new();
        for fragment in self.collector.in_submission_order() {
            let component = fragment.component();
            let target = fragment.fragment().breakpoint.as_deref();
            let rank = rank_of(target);
            match highest.entry(component) {
                Entry::Occupied(mut top) => {
                    let (top_rank, top_target) = *top.get();
                    match rank.cmp(&top_rank) {
                        Ordering::Less => {
                            let inversion = CascadeInversion {
                                component: component.to_string(),
                                earlier: top_target.map(str::to_string),
                                later: target.map(str::to_string),
                            };
                            if !inversions.contains(&inversion) {
                                tracing::debug!(%inversion, "cascade inversion");
                                inversions.push(inversion);
                            }
                        }
                        Ordering::Greater => {
                            let _ = top.insert((rank, target));
                        }
                        Ordering::Equal => {}
                    }
                }
                Entry::Vacant(slot) => {
                    let _ = slot.insert((rank, target));
                }
            }
        }
        inversions
    }
}
