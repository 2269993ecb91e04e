pub mod completions;
pub mod generate;
pub mod init;
pub mod list;
pub mod validate;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::catalog::openapi_catalog;
use crate::config::ComponentsConfig;
use crate::error::Result;

/// Default catalog file name.
pub const CATALOG_FILENAME: &str = "oasgen.yaml";

/// oasgen - OpenAPI component source generator
#[derive(Parser, Debug)]
#[command(name = "oasgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate component source files from the catalog
    Generate(generate::GenerateArgs),

    /// List catalog components, versions and dependencies
    List(list::ListArgs),

    /// Check the catalog for problems without generating
    Validate(validate::ValidateArgs),

    /// Initialize a starter catalog file (generates oasgen.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load a catalog file, or fall back to the builtin OpenAPI catalog.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<ComponentsConfig> {
    match path {
        Some(path) => ComponentsConfig::load(path),
        None => Ok(openapi_catalog()),
    }
}
