//! Corso CLI - course prerequisite ordering

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use corso::catalog::load_catalog;
use corso::dag::{CourseGraph, Resolution};
use corso::error::{CorsoError, FixSuggestion};
use corso::report::{write_report, OrderReport};

#[derive(Parser)]
#[command(name = "corso")]
#[command(about = "Corso - course prerequisite ordering")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a catalog into a valid course order and write it out
    Order {
        /// Path to the course catalog JSON
        #[arg(default_value = "input_courses.json")]
        input: PathBuf,

        /// Where to write the ordered course list
        #[arg(short, long, default_value = "output_order.json")]
        output: PathBuf,

        /// On a circular dependency, still write the partial order
        #[arg(long)]
        partial: bool,
    },

    /// Parse, validate and resolve a catalog without writing anything
    Check {
        /// Path to the course catalog JSON
        #[arg(default_value = "input_courses.json")]
        input: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Order {
            input,
            output,
            partial,
        } => order(&input, &output, partial),
        Commands::Check { input } => check(&input),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        let suggestion = e
            .downcast_ref::<CorsoError>()
            .and_then(|err| err.fix_suggestion());
        if let Some(suggestion) = suggestion {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn order(input: &Path, output: &Path, partial: bool) -> Result<()> {
    let resolution = resolve_catalog(input)?;

    if !resolution.is_complete() {
        if partial {
            let report = OrderReport::from_order(&resolution.order);
            write_report(output, &report)
                .with_context(|| format!("writing partial order to {}", output.display()))?;
            eprintln!(
                "{} Partial order written to {} ({} course(s) resolved)",
                "!".yellow().bold(),
                output.display(),
                resolution.order.len(),
            );
        }
        return Err(cycle_error(resolution).into());
    }

    let report = OrderReport::from_order(&resolution.order);
    write_report(output, &report)
        .with_context(|| format!("writing order to {}", output.display()))?;

    println!(
        "{} Course order generated: {} course(s) -> {}",
        "✓".green(),
        resolution.order.len(),
        output.display()
    );

    Ok(())
}

fn check(input: &Path) -> Result<()> {
    let catalog = load_catalog(input)
        .with_context(|| format!("loading catalog from {}", input.display()))?;
    let graph = CourseGraph::from_catalog(&catalog);
    let resolution = graph.resolve();

    println!("{} Catalog '{}' is valid", "✓".green(), input.display());
    println!("  Courses: {}", graph.len());
    println!("  Prerequisite edges: {}", graph.edge_count());

    if !resolution.is_complete() {
        return Err(cycle_error(resolution).into());
    }

    println!(
        "  Order: {}",
        resolution
            .order
            .iter()
            .map(|code| code.as_ref())
            .collect::<Vec<_>>()
            .join(" -> ")
    );

    Ok(())
}

fn resolve_catalog(input: &Path) -> Result<Resolution> {
    let catalog = load_catalog(input)
        .with_context(|| format!("loading catalog from {}", input.display()))?;
    let graph = CourseGraph::from_catalog(&catalog);
    Ok(graph.resolve())
}

fn cycle_error(resolution: Resolution) -> CorsoError {
    CorsoError::CircularDependency {
        unresolved: resolution
            .unresolved
            .iter()
            .map(|code| code.to_string())
            .collect(),
    }
}
