//! Specificity CLI
//!
//! Inspect CSS selector specificity from the command line, for quick
//! answers to "which of these rules wins".

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use specificity::{
    DEFAULT_BASE, Specificity, classify, simple_selectors, split_selector_list,
    strip_combinators,
};

/// Compute CSS selector specificity.
///
/// Each argument may be a single selector or a comma-separated selector
/// list; for a list, the highest-specificity member is reported. With no
/// arguments, selectors are read one per line from stdin.
#[derive(Parser)]
#[command(name = "specificity", version)]
struct Cli {
    /// Selectors to inspect.
    selectors: Vec<String>,

    /// Print the folded integer value instead of the triple.
    #[arg(long)]
    value: bool,

    /// Positional base for the folded value.
    #[arg(long, default_value_t = DEFAULT_BASE)]
    base: u64,

    /// Emit one JSON object per selector.
    #[arg(long, conflicts_with_all = ["value", "explain"])]
    json: bool,

    /// Show every simple selector with its bucket.
    #[arg(long)]
    explain: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.selectors.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read selector from stdin")?;
            if !line.trim().is_empty() {
                report(line.trim(), &cli)?;
            }
        }
    } else {
        for input in &cli.selectors {
            report(input, &cli)?;
        }
    }

    Ok(())
}

/// Print one selector's specificity in the requested form.
fn report(input: &str, cli: &Cli) -> Result<()> {
    let spec = specificity::specificity(input);
    let value = spec.value_with_base(cli.base);

    if cli.json {
        let line = serde_json::to_string(&serde_json::json!({
            "selector": input,
            "specificity": spec,
            "specificity-value": value,
        }))
        .context("failed to serialize result")?;
        println!("{line}");
        return Ok(());
    }

    if cli.explain {
        explain(input);
    }

    if cli.value {
        println!("{} {}", format!("{input}:").bold(), value.to_string().green());
    } else {
        println!("{} {}", format!("{input}:").bold(), spec.to_string().green());
    }

    Ok(())
}

/// Per-member breakdown: every simple selector with its bucket, then the
/// member's triple.
fn explain(input: &str) {
    for member in split_selector_list(input) {
        println!("  {}", member.bold());
        for token in simple_selectors(&strip_combinators(&member)) {
            let bucket = classify(&token);
            println!("    {token} {}", format!("({bucket})").dimmed());
        }
        let spec = Specificity::of_selector(&member);
        println!("    = {}", spec.to_string().green());
    }
}
