use anyhow::Result;
use clap::Args;
use colored::Colorize;
use rticles_evaluator::paragraph_numbers_for_topic;
use std::path::PathBuf;

use crate::input::load_document;

#[derive(Debug, Args)]
pub struct TopicsArgs {
    /// Input document (.yml, .yaml or .json)
    pub input: PathBuf,

    /// Topic name to look up
    pub topic: String,

    /// Set a named choice, e.g. --choice assets or --choice assets=false
    #[arg(long = "choice", value_name = "NAME[=BOOL]")]
    pub choices: Vec<String>,

    /// Consolidate runs of adjacent numbers into ranges
    #[arg(long)]
    pub consolidate: bool,
}

pub fn topics(args: TopicsArgs) -> Result<()> {
    let document = load_document(&args.input, &args.choices, &[])?;
    let numbers = paragraph_numbers_for_topic(&document, &args.topic, args.consolidate);

    if numbers.is_empty() {
        println!(
            "{}",
            format!("No paragraphs cover topic '{}'", args.topic).yellow()
        );
    } else {
        println!("{}: {}", args.topic.bold(), numbers);
    }

    Ok(())
}
