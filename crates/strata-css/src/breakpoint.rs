//! Breakpoint identity and media conditions.
//!
//! A [`Breakpoint`] is what authors name when they tag a rule fragment
//! (`"320up"`, `"768up2x"`). Its [`Condition`] is what they configure; the
//! [`MediaCondition`] is what the registry resolves it to once any pairing has
//! been checked, and is all the predicate renderer needs.

use serde::{Deserialize, Serialize};

/// The viewport width feature a base-width breakpoint tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidthBound {
    /// `min-width: {px}px`, used by the progressive "and up" breakpoints.
    MinWidth(u32),
    /// `max-width: {px}px`, the mobile ceiling.
    MaxWidth(u32),
}

impl WidthBound {
    /// The parenthesized media feature, without the `only screen` scope.
    ///
    /// ```
    /// use strata_css::WidthBound;
    /// assert_eq!(WidthBound::MinWidth(768).feature(), "min-width: 768px");
    /// ```
    #[must_use]
    pub fn feature(self) -> String {
        match self {
            Self::MinWidth(px) => format!("min-width: {px}px"),
            Self::MaxWidth(px) => format!("max-width: {px}px"),
        }
    }
}

/// The three shapes a breakpoint can take.
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
pub enum BreakpointKind {
    /// A single viewport width test.
    BaseWidth,
    /// Pixel density only, at any width.
    HiDpi,
    /// Pixel density combined with a paired base breakpoint's width.
    WidthHiDpi,
}

/// How a breakpoint is declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// A base-width breakpoint.
    Width(WidthBound),
    /// A hi-dpi-only breakpoint.
    HiDpi,
    /// A width+hi-dpi breakpoint; the base must already be registered.
    PairedHiDpi {
        /// Name of the base-width breakpoint whose width is ANDed in.
        paired_with: String,
    },
}

/// A condition with pairings resolved, ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaCondition {
    /// Width test only.
    Width(WidthBound),
    /// Density test only.
    HiDpi,
    /// Density test ANDed with the paired base's width test.
    WidthHiDpi(WidthBound),
}

impl MediaCondition {
    /// The kind of breakpoint this condition came from.
    #[must_use]
    pub const fn kind(self) -> BreakpointKind {
        match self {
            Self::Width(_) => BreakpointKind::BaseWidth,
            Self::HiDpi => BreakpointKind::HiDpi,
            Self::WidthHiDpi(_) => BreakpointKind::WidthHiDpi,
        }
    }
}

/// A named, ranked viewport or density condition.
///
/// Immutable once built; the registry hands out shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Breakpoint {
    name: String,
    rank: i32,
    condition: Condition,
}

impl Breakpoint {
    /// Build a breakpoint from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, rank: i32, condition: Condition) -> Self {
        Self {
            name: name.into(),
            rank,
            condition,
        }
    }

    /// `only screen and (min-width: {px}px)`.
    #[must_use]
    pub fn min_width(name: impl Into<String>, rank: i32, px: u32) -> Self {
        Self::new(name, rank, Condition::Width(WidthBound::MinWidth(px)))
    }

    /// `only screen and (max-width: {px}px)`, the mobile ceiling.
    #[must_use]
    pub fn max_width(name: impl Into<String>, rank: i32, px: u32) -> Self {
        Self::new(name, rank, Condition::Width(WidthBound::MaxWidth(px)))
    }

    /// A density-only breakpoint.
    #[must_use]
    pub fn hi_dpi(name: impl Into<String>, rank: i32) -> Self {
        Self::new(name, rank, Condition::HiDpi)
    }

    /// A density breakpoint scoped to the width of `paired_with`.
    #[must_use]
    pub fn paired_hi_dpi(
        name: impl Into<String>,
        rank: i32,
        paired_with: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            rank,
            Condition::PairedHiDpi {
                paired_with: paired_with.into(),
            },
        )
    }

    /// Unique name authors tag fragments with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unique rank; lower ranks are emitted first.
    #[must_use]
    pub const fn rank(&self) -> i32 {
        self.rank
    }

    /// The declared condition.
    #[must_use]
    pub const fn condition(&self) -> &Condition {
        &self.condition
    }

    /// The kind, derived from the condition.
    #[must_use]
    pub const fn kind(&self) -> BreakpointKind {
        match self.condition {
            Condition::Width(_) => BreakpointKind::BaseWidth,
            Condition::HiDpi => BreakpointKind::HiDpi,
            Condition::PairedHiDpi { .. } => BreakpointKind::WidthHiDpi,
        }
    }

    /// The base breakpoint name for width+hi-dpi breakpoints.
    #[must_use]
    pub fn paired_with(&self) -> Option<&str> {
        match &self.condition {
            Condition::PairedHiDpi { paired_with } => Some(paired_with),
            Condition::Width(_) | Condition::HiDpi => None,
        }
    }
}
