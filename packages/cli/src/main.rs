mod commands;
mod input;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{render, topics, RenderArgs, TopicsArgs};

/// Rticles CLI - render customisable hierarchical documents
#[derive(Parser, Debug)]
#[command(name = "rticles")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a document as HTML or a plain text outline
    Render(RenderArgs),

    /// List the paragraph numbers covering a topic
    Topics(TopicsArgs),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Render(args) => render(args),
        Command::Topics(args) => topics(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
