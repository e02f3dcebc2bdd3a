//! The standard breakpoint set.
//!
//! A mobile ceiling below everything, six progressive "and up" widths, a
//! density-only breakpoint, and density variants of the two desktop widths.
//! Legacy output stops at `768up`: old desktop browsers get the 768 layout.

use crate::breakpoint::{BreakpointKind, WidthBound};
use crate::config::{BreakpointConfig, Cutoff, RegistryConfig};

/// Name of the breakpoint legacy output stops at.
pub const LEGACY_CUTOFF: &str = "768up";

const WIDTHS: [(&str, i32, WidthBound); 7] = [
    ("mobile", 0, WidthBound::MaxWidth(767)),
    ("320up", 1, WidthBound::MinWidth(320)),
    ("480up", 2, WidthBound::MinWidth(480)),
    ("600up", 3, WidthBound::MinWidth(600)),
    ("768up", 4, WidthBound::MinWidth(768)),
    ("992up", 5, WidthBound::MinWidth(992)),
    ("1382up", 6, WidthBound::MinWidth(1382)),
];

const PAIRS: [(&str, i32, &str); 2] = [("768up2x", 8, "768up"), ("992up2x", 9, "992up")];

/// The standard configuration, ready to [`RegistryConfig::build`].
#[must_use]
pub fn standard_config() -> RegistryConfig {
    let mut breakpoints: Vec<BreakpointConfig> = WIDTHS
        .iter()
        .map(|&(name, rank, bound)| BreakpointConfig {
            name: name.to_string(),
            rank,
            kind: BreakpointKind::BaseWidth,
            width: Some(bound),
            paired_with: None,
        })
        .collect();

    breakpoints.push(BreakpointConfig {
        name: "all2x".to_string(),
        rank: 7,
        kind: BreakpointKind::HiDpi,
        width: None,
        paired_with: None,
    });

    breakpoints.extend(PAIRS.iter().map(|&(name, rank, base)| BreakpointConfig {
        name: name.to_string(),
        rank,
        kind: BreakpointKind::WidthHiDpi,
        width: None,
        paired_with: Some(base.to_string()),
    }));

    RegistryConfig {
        cutoff: Cutoff::Breakpoint(LEGACY_CUTOFF.to_string()),
        breakpoints,
    }
}
