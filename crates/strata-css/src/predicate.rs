//! Media-query predicate rendering.
//!
//! Output must match the documented predicates byte for byte, so the dpi
//! clauses are a fixed table in vendor order: standard, `-webkit-`, `-o-`,
//! resolution.

use crate::breakpoint::{MediaCondition, WidthBound};

/// Density clauses, in the order they must appear.
pub const DPI_CLAUSES: [&str; 4] = [
    "min-device-pixel-ratio: 1.3",
    "-webkit-min-device-pixel-ratio: 1.3",
    "-o-min-device-pixel-ratio: 13/10",
    "min-resolution: 120dpi",
];

/// Every clause is scoped to screen media.
const SCOPE: &str = "only screen and";

/// Separator between disjoint clauses of one predicate.
const DISJUNCTION: &str = ", ";

/// Render the predicate placed between `@media` and the opening brace.
///
/// ```
/// use strata_css::{MediaCondition, WidthBound, predicate::render};
///
/// assert_eq!(
///     render(MediaCondition::Width(WidthBound::MinWidth(320))),
///     "only screen and (min-width: 320px)"
/// );
/// ```
#[must_use]
pub fn render(condition: MediaCondition) -> String {
    match condition {
        MediaCondition::Width(bound) => width_clause(bound),
        MediaCondition::HiDpi => DPI_CLAUSES
            .iter()
            .map(|dpi| format!("{SCOPE} ({dpi})"))
            .collect::<Vec<_>>()
            .join(DISJUNCTION),
        MediaCondition::WidthHiDpi(bound) => {
            let width = bound.feature();
            DPI_CLAUSES
                .iter()
                .map(|dpi| format!("{SCOPE} ({dpi}) and ({width})"))
                .collect::<Vec<_>>()
                .join(DISJUNCTION)
        }
    }
}

fn width_clause(bound: WidthBound) -> String {
    format!("{SCOPE} ({})", bound.feature())
}
