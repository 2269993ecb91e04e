//! List command implementation.
//!
//! Prints the catalog inventory: components, supported versions, and
//! optionally dependency relationships. `--json` writes a machine-readable
//! inventory to stdout.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::load_catalog;
use crate::config::{process, ProcessedConfig};
use crate::error::{GenError, Result};
use crate::output::Printer;

/// List catalog components, versions and dependencies
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Catalog file (defaults to the builtin OpenAPI catalog)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Show dependency relationships
    #[arg(long)]
    pub deps: bool,

    /// Write a JSON inventory to stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ComponentEntry<'a> {
    name: &'a str,
    full_name: &'a str,
    reference: &'a str,
    versions: Vec<String>,
    dependencies: Vec<&'a str>,
    dependents: Vec<&'a str>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let catalog = load_catalog(args.config.as_deref())?;
    let processed = process(&catalog);

    if args.json {
        print_json(&processed)?;
    } else if args.deps {
        print_deps(&processed, printer);
    } else {
        print_inventory(&processed, printer);
    }

    Ok(())
}

fn print_inventory(processed: &ProcessedConfig, printer: &Printer) {
    for component in processed.components() {
        let versions: Vec<&str> = component.versions.iter().map(|v| v.key()).collect();
        printer.info(
            &versions.join("+"),
            &format!("{} {}", component.name, printer.dim(&component.reference)),
        );
    }
}

fn print_deps(processed: &ProcessedConfig, printer: &Printer) {
    let graph = processed.graph();

    for component in processed.components() {
        let deps: Vec<&str> = graph.dependencies_of(&component.name).collect();
        if deps.is_empty() {
            printer.info("component", &component.name);
        } else {
            printer.info(
                "component",
                &format!(
                    "{} {} {}",
                    component.name,
                    printer.dim("->"),
                    deps.join(", ")
                ),
            );
        }
    }
}

fn print_json(processed: &ProcessedConfig) -> Result<()> {
    let graph = processed.graph();
    let entries: Vec<ComponentEntry> = processed
        .components()
        .iter()
        .map(|component| ComponentEntry {
            name: &component.name,
            full_name: &component.full_name,
            reference: &component.reference,
            versions: component.versions.iter().map(|v| v.to_string()).collect(),
            dependencies: graph.dependencies_of(&component.name).collect(),
            dependents: graph.dependents_of(&component.name).collect(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries).map_err(|e| GenError::Generate {
        message: format!("Failed to serialize inventory: {}", e),
        help: None,
    })?;
    println!("{}", json);
    Ok(())
}
