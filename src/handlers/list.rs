//! Catalog browsing: list, show and explain examples.

use anyhow::{anyhow, Result};
use owo_colors::OwoColorize;

use crate::catalog::{self, Example, ExampleKind};
use crate::printer::{print_numbered, MarkdownPrinter};

pub fn list(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog::all())?);
        return Ok(());
    }
    for example in catalog::all() {
        let kind = match example.kind {
            ExampleKind::Plain => format!("{}", example.kind.label().green()),
            ExampleKind::Contract => format!("{}", example.kind.label().cyan()),
        };
        println!("{:<18} {:<22} {}", example.name, example.file.dimmed(), kind);
    }
    Ok(())
}

/// Print the source of an example; unknown names print the not-found placeholder.
pub fn show(name: &str) {
    let title = catalog::find(name).map(|e| e.file).unwrap_or(name);
    print_numbered(&format!("Contents of {title}"), catalog::source_for(name), Some("cyan"));
}

pub fn explain(name: &str) -> Result<()> {
    let example = find(name)?;
    MarkdownPrinter::default().print(example.explanation);
    Ok(())
}

/// Resolve a display name, with the list of valid names in the error.
pub fn find(name: &str) -> Result<&'static Example> {
    catalog::find(name).ok_or_else(|| {
        let names: Vec<_> = catalog::names().map(|n| format!("'{n}'")).collect();
        anyhow!("unknown example '{name}'; available: {}", names.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_reports_available_names() {
        assert_eq!(find("Functions").unwrap().file, "functions.rs");
        let err = find("Loops").unwrap_err().to_string();
        assert!(err.contains("unknown example 'Loops'"));
        assert!(err.contains("'Hello world!'"));
    }
}
