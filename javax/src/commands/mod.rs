mod completions;
mod fmt;
mod generate;
mod list;
mod pick;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fmt::FmtCommand;
use generate::GenerateArgs;
use javax_core::DeclarationKind;
use list::ListCommand;
use pick::PickCommand;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for javax_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for javax_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "javax")]
#[command(version)]
#[command(about = "Generate Java constructors, builders and getters from field declarations")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Constructor(args) => args.run(DeclarationKind::Constructor),
            Commands::Builder(args) => args.run(DeclarationKind::Builder),
            Commands::Getters(args) => args.run(DeclarationKind::Getters),
            Commands::Pick(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Fmt(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a private constructor taking the selected fields
    Constructor(GenerateArgs),

    /// Generate a nested Builder class for the selected fields
    Builder(GenerateArgs),

    /// Generate getters for the selected fields
    Getters(GenerateArgs),

    /// Choose what to generate from a menu
    Pick(PickCommand),

    /// List the available generators
    List(ListCommand),

    /// Re-indent a Java snippet by brace depth
    ///
    /// Depth changes only at a `{` or `}` that ends a line. A line such as
    /// `} else {` counts as an opening brace alone, so if/else chains are
    /// reported as unclosed.
    Fmt(FmtCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
