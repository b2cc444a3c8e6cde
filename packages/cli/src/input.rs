//! Loading documents from disk and applying command line customisations.

use anyhow::{anyhow, Context, Result};
use rticles_document::Document;
use rticles_editor::{from_json, from_yaml};
use std::fs;
use std::path::Path;

/// Read a YAML or JSON document and apply `--choice` / `--insert` flags.
pub fn load_document(path: &Path, choices: &[String], insertions: &[String]) -> Result<Document> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let mut document = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => from_json(&source)?,
        Some("yml") | Some("yaml") | None => from_yaml(&source)?,
        Some(other) => return Err(anyhow!("Unsupported document format: .{}", other)),
    };

    for raw in choices {
        let (name, value) = parse_choice(raw)?;
        document.set_choice(name, value);
    }

    for raw in insertions {
        let (name, text) = raw
            .split_once('=')
            .ok_or_else(|| anyhow!("Insertions take the form name=text, got: {}", raw))?;
        document.set_insertion(name, text);
    }

    Ok(document)
}

/// `name` alone sets the choice; `name=true` / `name=false` are explicit.
fn parse_choice(raw: &str) -> Result<(&str, bool)> {
    match raw.split_once('=') {
        None => Ok((raw, true)),
        Some((name, "true")) => Ok((name, true)),
        Some((name, "false")) => Ok((name, false)),
        Some((_, other)) => Err(anyhow!("Choices are true or false, got: {}", other)),
    }
}
