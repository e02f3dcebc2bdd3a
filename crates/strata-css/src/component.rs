//! Colocated component authoring.
//!
//! A component keeps its universal rules and every breakpoint override side by
//! side, in the order the author wrote them. Each entry becomes one
//! [`RuleFragment`] on submission.

use crate::collector::RuleFragment;

/// All of one component's rules, across every breakpoint.
///
/// ```
/// use strata_css::Component;
///
/// let nav = Component::new("nav")
///     .rules(".nav { display: block; }")
///     .at("768up", ".nav { display: flex; }");
/// assert_eq!(nav.fragments().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: String,
    entries: Vec<(Option<String>, String)>,
}

impl Component {
    /// An empty component.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
        }
    }

    /// Add rules that apply everywhere.
    #[must_use]
    pub fn rules(mut self, text: impl Into<String>) -> Self {
        self.entries.push((None, text.into()));
        self
    }

    /// Add rules scoped to `breakpoint`.
    #[must_use]
    pub fn at(mut self, breakpoint: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.push((Some(breakpoint.into()), text.into()));
        self
    }

    /// Add an entry in place; `None` means universal.
    pub fn push(&mut self, breakpoint: Option<String>, text: impl Into<String>) {
        self.entries.push((breakpoint, text.into()));
    }

    /// The component id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the component has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The component's fragments in authoring order.
    pub fn fragments(&self) -> impl Iterator<Item = RuleFragment> {
        self.entries.iter().map(|(breakpoint, text)| RuleFragment {
            component: self.id.clone(),
            breakpoint: breakpoint.clone(),
            text: text.clone(),
        })
    }
}
