//! Breakpoint collation compiler for responsive stylesheets.
//!
//! # Scope
//!
//! Components author their styles for every breakpoint in one place. This crate
//! collects those rule fragments and collates them into two stylesheets:
//!
//! - **Modern** - one `@media` block per breakpoint, in rank order, with every
//!   component's rules for that breakpoint grouped inside it
//! - **Legacy** - a flattened "desktop" rendering for browsers without media
//!   queries: universal rules plus every base-width breakpoint up to the
//!   configured cutoff, with no predicates at all
//!
//! Pipeline, leaves first:
//!
//! - **Breakpoint Registry** ([`Registry`]) - ordered, named breakpoints
//! - **Predicate Renderer** ([`predicate::render`]) - exact media-query text
//! - **Rule Collector** ([`Collector`]) - fragments bucketed by breakpoint
//! - **Collation Engine** ([`collate`]) - ordered, non-empty output blocks
//! - **Emitter** ([`emit_modern`], [`emit_legacy`]) - stylesheet text
//!
//! [`Compiler`] ties them together for one compilation unit.
//!
//! ```
//! use strata_css::{Breakpoint, Compiler, Component, Registry};
//!
//! let mut registry = Registry::new(2);
//! registry.register(Breakpoint::min_width("320up", 1, 320))?;
//! registry.register(Breakpoint::min_width("768up", 2, 768))?;
//!
//! let mut compiler = Compiler::new(&registry);
//! compiler.submit_component(
//!     &Component::new("nav")
//!         .rules(".nav { margin: 0; }")
//!         .at("768up", ".nav { float: left; }"),
//! )?;
//!
//! assert_eq!(
//!     compiler.compile_modern(),
//!     ".nav { margin: 0; }\n\n@media only screen and (min-width: 768px) {\n.nav { float: left; }\n}"
//! );
//! assert_eq!(compiler.compile_legacy(), ".nav { margin: 0; }\n.nav { float: left; }");
//! # Ok::<(), strata_css::CollateError>(())
//! ```
//!
//! # Not In Scope
//!
//! - Parsing preprocessor source; fragments are opaque text
//! - CSS validation and minification
//! - File I/O (see the `strata` CLI)

/// Breakpoint identity and conditions.
pub mod breakpoint;
/// Grouping buckets into ordered output blocks.
pub mod collation;
/// Fragment submission and bucketing.
pub mod collector;
/// Compilation units.
pub mod compiler;
/// Colocated component authoring.
pub mod component;
/// JSON configuration and source documents.
pub mod config;
/// Stylesheet text output.
pub mod emitter;
/// Error types.
pub mod error;
/// Media-query predicate text.
pub mod predicate;
/// The standard breakpoint set.
pub mod preset;
/// The breakpoint registry.
pub mod registry;

// Re-exports for convenience
pub use breakpoint::{Breakpoint, BreakpointKind, Condition, MediaCondition, WidthBound};
pub use collation::{BlockTarget, Mode, OutputBlock, collate};
pub use collector::{Collector, RuleFragment, SequencedFragment};
pub use compiler::{CascadeInversion, Compiler, Stylesheets};
pub use component::Component;
pub use config::{BreakpointConfig, ComponentSource, Cutoff, RegistryConfig, RuleSource, SourceDocument};
pub use emitter::{emit_legacy, emit_modern};
pub use error::{CollateError, CollateResult, Identity};
pub use preset::standard_config;
pub use registry::Registry;
