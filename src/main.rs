//! xmlref — generate a Markdown API reference from compiler-emitted XML
//! documentation files.
//!
//! Reads the `doc`/`members`/`member` XML the C# compiler produces for the
//! `/doc` flag and writes one reference page: a heading per documented type,
//! method, field and event, with parameter tables and return values.
//!
//! Two modes:
//!
//! - **stdin mode**: `xmlref -n KiteConnect < kiteconnect.xml`
//! - **file mode**: `xmlref -n KiteConnect -o docs/reference.md kiteconnect.xml`

mod classify;
mod model;
mod parser;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use model::Member;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "xmlref",
    about = "Generate a Markdown API reference from XML documentation comments"
)]
struct Cli {
    /// Input XML files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output file. If omitted, writes to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Root namespace prefix to strip from member names (trailing dot
    /// implied). Can be specified multiple times.
    #[arg(short = 'n', long = "namespace")]
    namespaces: Vec<String>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Directory prefix for heading icon images
    #[arg(long, default_value = "/assets")]
    assets: String,

    /// Omit icon images from headings
    #[arg(long)]
    no_icons: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let namespaces: Vec<String> = cli
        .namespaces
        .iter()
        .map(|ns| classify::namespace_prefix(ns))
        .collect();

    let renderer = render::create_renderer(
        &cli.format,
        &render::RenderOptions {
            assets: cli.assets.clone(),
            icons: !cli.no_icons,
        },
    )?;

    let mut members: Vec<Member> = Vec::new();
    if cli.files.is_empty() {
        // stdin mode
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        let doc = parser::parse(&input).context("failed to parse stdin")?;
        classify_members(doc, &namespaces, &mut members);
    } else {
        for path in expand_globs(&cli.files)? {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let doc = parser::parse(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            classify_members(doc, &namespaces, &mut members);
        }
    }

    let output = renderer.render(&members);
    match cli.output {
        Some(ref path) => fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", output),
    }

    Ok(())
}

/// Run every raw member through the classifier, in document order. Members
/// the classifier rejects (unknown kind letters, hidden delegates) produce
/// no output at all.
fn classify_members(doc: model::Document, namespaces: &[String], out: &mut Vec<Member>) {
    for raw in doc.members {
        if let Some(classified) = classify::classify(&raw.name, namespaces) {
            out.push(Member {
                kind: classified.kind,
                name: classified.name,
                arg_types: classified.arg_types,
                summary: raw.summary,
                params: raw.params,
                returns: raw.returns,
            });
        }
    }
}

/// Expand glob patterns into a list of real file paths. Argument order is
/// preserved; matches within one pattern sort for deterministic output.
///
/// A literal path (no glob metacharacters) that does not exist is a fatal
/// error; only genuine patterns degrade to a warning when nothing matches.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            push_unique(&mut files, path.to_path_buf());
            continue;
        }
        if !is_glob_pattern(pattern) {
            bail!("input file not found: {}", pattern);
        }
        let mut matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        matches.sort();
        for m in matches {
            push_unique(&mut files, m);
        }
    }
    Ok(files)
}

fn is_glob_pattern(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

fn push_unique(files: &mut Vec<PathBuf>, path: PathBuf) {
    if !files.contains(&path) {
        files.push(path);
    }
}
