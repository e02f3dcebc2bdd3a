//! strata CLI
//!
//! Compiles component rule sources into modern and legacy stylesheets, and
//! inspects how fragments collate.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use strata_common::warning::{set_quiet, warn_once};
use strata_css::{
    BlockTarget, Compiler, Mode, OutputBlock, Registry, RegistryConfig, SourceDocument,
    predicate, standard_config,
};
use tracing::Level;

/// strata: collate per-component breakpoint rules into grouped stylesheets
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the modern stylesheet for a source document
    strata build components.json

    # Write both stylesheets using a custom breakpoint set
    strata build components.json --config breakpoints.json \
        --modern dist/screen.css --legacy dist/legacy.css

    # Show which blocks the legacy stylesheet will contain
    strata inspect components.json --mode legacy

    # List the standard breakpoints and their predicates
    strata predicates
"#)]
struct Cli {
    /// Breakpoint configuration (JSON); defaults to the standard set
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Record authoring warnings without printing them
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a source document into stylesheets
    Build {
        /// Component source document (JSON)
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Write the modern stylesheet here (stdout when neither output is given)
        #[arg(long, value_name = "FILE")]
        modern: Option<PathBuf>,

        /// Write the legacy stylesheet here
        #[arg(long, value_name = "FILE")]
        legacy: Option<PathBuf>,
    },
    /// Print the collated block plan
    Inspect {
        /// Component source document (JSON)
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Which stylesheet to plan
        #[arg(long, value_enum, default_value_t = ModeArg::Modern)]
        mode: ModeArg,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// List registered breakpoints with their predicates
    Predicates,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Modern,
    Legacy,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Modern => Self::Modern,
            ModeArg::Legacy => Self::Legacy,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    set_quiet(cli.quiet);

    let registry = load_registry(cli.config.as_deref())?;

    match &cli.command {
        Command::Build {
            source,
            modern,
            legacy,
        } => build(
            &registry,
            source,
            modern.as_deref(),
            legacy.as_deref(),
            &mut io::stdout().lock(),
        ),
        Command::Inspect { source, mode, json } => inspect(
            &registry,
            source,
            (*mode).into(),
            *json,
            &mut io::stdout().lock(),
        ),
        Command::Predicates => {
            write_predicates(&registry, &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Build the registry from `--config`, or the standard set
fn load_registry(path: Option<&Path>) -> Result<Registry> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config '{}'", path.display()))?;
            RegistryConfig::from_json(&text)
                .with_context(|| format!("invalid config '{}'", path.display()))?
        }
        None => standard_config(),
    };
    let registry = config.build().context("failed to build breakpoint registry")?;
    tracing::info!(
        breakpoints = registry.len(),
        cutoff = registry.cutoff_rank(),
        "registry ready"
    );
    Ok(registry)
}

/// Read a source document and submit every component
fn compile_source<'r>(registry: &'r Registry, path: &Path) -> Result<Compiler<'r>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read source '{}'", path.display()))?;
    let document = SourceDocument::from_json(&text)
        .with_context(|| format!("invalid source '{}'", path.display()))?;

    let mut compiler = Compiler::new(registry);
    for component in document.components() {
        compiler
            .submit_component(&component)
            .with_context(|| format!("component `{}`", component.id()))?;
    }
    tracing::info!(
        fragments = compiler.collector().len(),
        components = document.components.len(),
        "collected source"
    );

    for inversion in compiler.cascade_inversions() {
        warn_once("cascade", &inversion.to_string());
    }
    Ok(compiler)
}

/// Compile `source`; the modern sheet goes to `out` unless an output file is given
fn build(
    registry: &Registry,
    source: &Path,
    modern: Option<&Path>,
    legacy: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let compiler = compile_source(registry, source)?;
    let sheets = compiler.compile();

    if modern.is_none() && legacy.is_none() {
        writeln!(out, "{}", sheets.modern)?;
        return Ok(());
    }
    if let Some(path) = modern {
        write_sheet(path, &sheets.modern)?;
    }
    if let Some(path) = legacy {
        write_sheet(path, &sheets.legacy)?;
    }
    Ok(())
}

fn write_sheet(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    fs::write(path, format!("{text}\n"))
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote stylesheet");
    Ok(())
}

fn inspect(
    registry: &Registry,
    source: &Path,
    mode: Mode,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let compiler = compile_source(registry, source)?;
    let blocks = compiler.blocks(mode);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&blocks)?)?;
        return Ok(());
    }

    writeln!(out, "=== {mode} plan ({} blocks) ===", blocks.len())?;
    for (index, block) in blocks.iter().enumerate() {
        write_block(out, index, block, mode)?;
    }
    Ok(())
}

fn write_block(
    out: &mut impl Write,
    index: usize,
    block: &OutputBlock,
    mode: Mode,
) -> io::Result<()> {
    let components = block.components.join(", ");
    match &block.target {
        BlockTarget::Universal => writeln!(
            out,
            "{index:>3}  {}  {} fragment(s) from {components}",
            "universal".green().bold(),
            block.fragment_count,
        ),
        BlockTarget::Breakpoint { name, rank, media } => {
            writeln!(
                out,
                "{index:>3}  {} (rank {rank})  {} fragment(s) from {components}",
                name.cyan().bold(),
                block.fragment_count,
            )?;
            if mode == Mode::Modern {
                writeln!(out, "     {}", predicate::render(*media).dimmed())?;
            }
            Ok(())
        }
    }
}

fn write_predicates(registry: &Registry, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "=== Breakpoints ({} registered, legacy cutoff rank {}) ===",
        registry.len(),
        registry.cutoff_rank()
    )?;
    for breakpoint in registry.ordered_all() {
        let legacy = if registry.is_legacy_eligible(breakpoint) {
            "legacy".green().to_string()
        } else {
            "modern only".yellow().to_string()
        };
        writeln!(
            out,
            "{:>4}  {:<10} {:<13} {legacy}",
            breakpoint.rank(),
            breakpoint.name().bold(),
            breakpoint.kind(),
        )?;
        if let Ok(predicate) = registry.predicate(breakpoint.name()) {
            writeln!(out, "      {}", predicate.dimmed())?;
        }
    }
    Ok(())
}
