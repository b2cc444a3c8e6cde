use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use rticles_compiler_html::{compile_to_html, CompileOptions};
use rticles_evaluator::{outline, OutlineNode, OutlineOptions};
use std::fs;
use std::path::PathBuf;

use crate::input::load_document;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Input document (.yml, .yaml or .json)
    pub input: PathBuf,

    /// Target format (html, outline)
    #[arg(short, long, default_value = "html")]
    pub target: String,

    /// Set a named choice, e.g. --choice assets or --choice assets=false
    #[arg(long = "choice", value_name = "NAME[=BOOL]")]
    pub choices: Vec<String>,

    /// Fill a named insertion, e.g. --insert organisation_name=Tuttle
    #[arg(long = "insert", value_name = "NAME=TEXT")]
    pub insertions: Vec<String>,

    /// Omit paragraph numbers from the rendered text
    #[arg(long)]
    pub no_index: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn render(args: RenderArgs) -> Result<()> {
    let document = load_document(&args.input, &args.choices, &args.insertions)?;

    let output = match args.target.as_str() {
        "html" => {
            let options = CompileOptions {
                with_index: !args.no_index,
                ..CompileOptions::default()
            };
            compile_to_html(&document, options)
        }
        "outline" => {
            let options = OutlineOptions {
                with_index: !args.no_index,
                ..OutlineOptions::default()
            };
            render_outline(&outline(&document, &options))
        }
        other => {
            return Err(anyhow!("Unknown target: {}", other));
        }
    };

    match args.out {
        Some(path) => {
            fs::write(&path, &output)?;
            println!(
                "{} {} → {}",
                "✓".green(),
                args.input.display(),
                path.display()
            );
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Flatten the outline into indented plain text, two spaces per level.
fn render_outline(nodes: &[OutlineNode]) -> String {
    let mut buffer = String::new();
    render_outline_level(nodes, 0, &mut buffer);
    buffer
}

fn render_outline_level(nodes: &[OutlineNode], depth: usize, buffer: &mut String) {
    for node in nodes {
        match node {
            OutlineNode::Text(text) => {
                for _ in 0..depth {
                    buffer.push_str("  ");
                }
                buffer.push_str(text);
                buffer.push('\n');
            }
            OutlineNode::Children(children) => {
                render_outline_level(children, depth + 1, buffer);
            }
        }
    }
}
