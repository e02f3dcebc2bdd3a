//! Configuration and source documents.
//!
//! Two JSON shapes feed the compiler from outside: the breakpoint registry
//! configuration and the per-component rule sources. Both are plain serde
//! models that convert into the core types, validating as they go.

use serde::{Deserialize, Serialize};

use crate::breakpoint::{Breakpoint, BreakpointKind, Condition, WidthBound};
use crate::component::Component;
use crate::error::{CollateError, CollateResult};
use crate::registry::Registry;

/// Where legacy output stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cutoff {
    /// The highest rank folded into legacy output.
    Rank(i32),
    /// The breakpoint whose rank is the highest folded into legacy output.
    Breakpoint(String),
}

/// One configured breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreakpointConfig {
    /// Unique name.
    pub name: String,
    /// Unique rank.
    pub rank: i32,
    /// Shape of the breakpoint.
    pub kind: BreakpointKind,
    /// Width test; required for `base-width`, forbidden otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<WidthBound>,
    /// Base breakpoint; required for `width-hi-dpi`, forbidden otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paired_with: Option<String>,
}

impl BreakpointConfig {
    /// Convert into a [`Breakpoint`], checking the field combination.
    ///
    /// # Errors
    ///
    /// Returns [`CollateError::InvalidBreakpoint`] if `width` or `paired_with`
    /// is missing where the kind needs it, or present where it does not.
    pub fn to_breakpoint(&self) -> CollateResult<Breakpoint> {
        let condition = match (self.kind, self.width, &self.paired_with) {
            (BreakpointKind::BaseWidth, Some(bound), None) => Condition::Width(bound),
            (BreakpointKind::BaseWidth, None, _) => {
                return Err(CollateError::invalid(&self.name, "base-width needs `width`"));
            }
            (BreakpointKind::HiDpi, None, None) => Condition::HiDpi,
            (BreakpointKind::WidthHiDpi, None, Some(paired_with)) => Condition::PairedHiDpi {
                paired_with: paired_with.clone(),
            },
            (BreakpointKind::WidthHiDpi, _, None) => {
                return Err(CollateError::invalid(
                    &self.name,
                    "width-hi-dpi needs `paired_with`",
                ));
            }
            (kind, width, paired_with) => {
                let field = if width.is_some() && kind != BreakpointKind::BaseWidth {
                    "width"
                } else if paired_with.is_some() {
                    "paired_with"
                } else {
                    "width"
                };
                return Err(CollateError::invalid(
                    &self.name,
                    format!("{kind} does not take `{field}`"),
                ));
            }
        };
        Ok(Breakpoint::new(self.name.clone(), self.rank, condition))
    }
}

/// The registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Highest rank (or breakpoint) folded into legacy output.
    pub cutoff: Cutoff,
    /// Breakpoints, registered in listed order.
    pub breakpoints: Vec<BreakpointConfig>,
}

impl RegistryConfig {
    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CollateError::Config`] if the text is not a valid configuration.
    pub fn from_json(text: &str) -> CollateResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CollateError::Config`] if serialization fails.
    pub fn to_json(&self) -> CollateResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the registry, registering breakpoints in listed order.
    ///
    /// # Errors
    ///
    /// Any registration error, [`CollateError::InvalidBreakpoint`] for a bad
    /// field combination, or [`CollateError::UnknownBreakpoint`] if the cutoff
    /// names a breakpoint that is not configured.
    pub fn build(&self) -> CollateResult<Registry> {
        let mut registry = Registry::new(i32::MIN);
        for breakpoint in &self.breakpoints {
            registry.register(breakpoint.to_breakpoint()?)?;
        }
        let cutoff = match &self.cutoff {
            Cutoff::Rank(rank) => *rank,
            Cutoff::Breakpoint(name) => registry.resolve(name)?.rank(),
        };
        registry.set_cutoff_rank(cutoff);
        Ok(registry)
    }
}

/// One rule entry of a component source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSource {
    /// Target breakpoint; absent or `null` for universal rules.
    #[serde(default)]
    pub breakpoint: Option<String>,
    /// Rule text.
    pub css: String,
}

/// One component of a source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSource {
    /// Component id.
    pub id: String,
    /// Rules in authoring order.
    #[serde(default)]
    pub rules: Vec<RuleSource>,
}

impl From<&ComponentSource> for Component {
    fn from(source: &ComponentSource) -> Self {
        let mut component = Self::new(source.id.clone());
        for rule in &source.rules {
            component.push(rule.breakpoint.clone(), rule.css.clone());
        }
        component
    }
}

/// A source document: every component of one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceDocument {
    /// Components in submission order.
    #[serde(default)]
    pub components: Vec<ComponentSource>,
}

impl SourceDocument {
    /// Parse a source document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CollateError::Config`] if the text is not a valid source document.
    pub fn from_json(text: &str) -> CollateResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The document's components, ready to submit.
    #[must_use]
    pub fn components(&self) -> Vec<Component> {
        self.components.iter().map(Component::from).collect()
    }
}
