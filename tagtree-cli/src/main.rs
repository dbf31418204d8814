//! Tagtree CLI
//!
//! Parses an HTML file or string and prints its token tree, either as an
//! indented dump or as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use tagtree_common::warning::{clear_warnings, set_quiet};
use tagtree_html::{HtmlTokenizer, ParseMode, print_tree};

/// Tagtree: dump the token tree of an HTML document
#[derive(Parser, Debug)]
#[command(name = "tagtree")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # Print the tree of a file
    tagtree ./index.html

    # Fail on the first malformation
    tagtree --strict ./index.html

    # Export an inline snippet as JSON
    tagtree --json --html '<ul><li>a<li>b</ul>'
")]
struct Cli {
    /// Path to an HTML file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse this HTML string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Error policy: `strict` fails on malformed input, `lenient` truncates
    #[arg(long, value_name = "MODE", default_value_t = ParseMode::Lenient)]
    mode: ParseMode,

    /// Shorthand for `--mode strict`
    #[arg(long)]
    strict: bool,

    /// Print the tree as JSON instead of the indented dump
    #[arg(long)]
    json: bool,

    /// Do not print recovery warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_quiet(cli.quiet);

    let (source, html) = load_source(&cli)?;
    clear_warnings();
    let mode = if cli.strict { ParseMode::Strict } else { cli.mode };

    let tree = match HtmlTokenizer::new(mode).tokenize(&html) {
        Ok(tree) => tree,
        Err(error) => {
            eprintln!("{} {source}: {error}", "error:".red().bold());
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", tree.to_json_pretty().context("failed to serialize the tree")?);
        return Ok(());
    }

    println!("{}", format!("=== Token Tree ({source}, {mode}) ===").bold());
    print_tree(&tree);
    println!("\n{} nodes, {} top-level", tree.len(), tree.roots().len());
    Ok(())
}

/// Read the document named on the command line, with a label for messages.
fn load_source(cli: &Cli) -> Result<(String, String)> {
    if let Some(ref html) = cli.html {
        return Ok(("<inline>".to_string(), html.clone()));
    }
    let Some(ref path) = cli.path else {
        bail!("a file path or --html is required");
    };
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok((path.display().to_string(), html))
}
