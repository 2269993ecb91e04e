use clap::Parser;
use miette::Result;
use oasgen::cli::{Cli, Commands};
use oasgen::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => oasgen::cli::generate::run(args, &printer)?,
        Commands::List(args) => oasgen::cli::list::run(args, &printer)?,
        Commands::Validate(args) => oasgen::cli::validate::run(args, &printer)?,
        Commands::Init(args) => oasgen::cli::init::run(args, &printer)?,
        Commands::Completions(args) => oasgen::cli::completions::run(args)?,
    }

    Ok(())
}
