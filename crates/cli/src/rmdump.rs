//! rmdump - Dump the contents of reMarkable lines files
//!
//! Decodes single `.rm` page files or whole notebooks and prints their
//! primitives, resolved render lines, or the PDF areas annotated by strokes.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{ArgAction, Parser, ValueEnum};
use remt_core::annotate::{Rect, page_strokes, pdf_scale, stroke_area};
use remt_core::api::resolve_strokes;
use remt_core::{
    DecodeOptions, Diagnostics, DocumentBuilder, Item, TextDevice, decode_file, render_items,
};
use tracing_subscriber::EnvFilter;

type Items = Box<dyn Iterator<Item = remt_core::Result<Item>>>;

/// Output type of the dump.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Indented text, one line per primitive and render line (default)
    #[default]
    Text,
    /// Decoded primitives as JSON lines
    Items,
    /// Resolved strokes (style and render lines) as JSON lines
    Lines,
    /// PDF areas annotated by strokes, per page, as JSON lines
    Areas,
}

/// Dump the contents of reMarkable tablet lines files.
#[derive(Parser, Debug)]
#[command(name = "rmdump")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lines files, or document paths `<dir>/<uuid>` with --document
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Treat inputs as documents: `<uuid>.content` plus `<uuid>/` page files
    #[arg(short = 'D', long, action = ArgAction::SetTrue)]
    document: bool,

    /// Page number given to single-page (version 3) files
    #[arg(short = 'p', long = "page-number", default_value = "0")]
    page_number: u32,

    /// A comma-separated list of document pages to decode (0-indexed)
    #[arg(long = "pages", value_delimiter = ',')]
    pages: Option<Vec<usize>>,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "text")]
    output_type: OutputType,

    /// PDF page size `WIDTHxHEIGHT` in points used to scale annotation areas
    #[arg(short = 's', long = "pdf-size", value_parser = parse_size)]
    pdf_size: Option<(f32, f32)>,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

/// Parse a page size such as `595x842`.
fn parse_size(s: &str) -> Result<(f32, f32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f32>()
            .ok()
            .filter(|v| *v > 0.0)
            .ok_or_else(|| format!("invalid page dimension: {v}"))
    };
    Ok((parse(w)?, parse(h)?))
}

fn init_tracing(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_items(args: &Args, input: &Path) -> anyhow::Result<Items> {
    if !args.document {
        let options = DecodeOptions::page_number(args.page_number);
        let parser = decode_file(input, Some(options))
            .with_context(|| format!("cannot decode {}", input.display()))?;
        return Ok(Box::new(parser));
    }

    let Some(uuid) = input.file_name().and_then(|n| n.to_str()) else {
        bail!("invalid document path: {}", input.display());
    };
    let dir = input.parent().unwrap_or_else(|| Path::new("."));

    let mut builder = DocumentBuilder::new(dir, uuid);
    if let Some(pages) = &args.pages {
        builder = builder.page_numbers(pages.clone());
    }
    let parser = builder
        .build()
        .with_context(|| format!("cannot open document {}", input.display()))?;
    Ok(Box::new(parser))
}

fn report(diagnostics: &Diagnostics) {
    for warning in diagnostics.warnings() {
        tracing::warn!("{warning}");
    }
}

fn dump(args: &Args, items: Items, out: &mut dyn Write) -> anyhow::Result<()> {
    match args.output_type {
        OutputType::Text => {
            let mut device = TextDevice::new(&mut *out);
            report(&render_items(items, &mut device)?);
        }
        OutputType::Items => {
            for item in items {
                serde_json::to_writer(&mut *out, &item?)?;
                writeln!(out)?;
            }
        }
        OutputType::Lines => {
            let (strokes, diagnostics) = resolve_strokes(items)?;
            for stroke in &strokes {
                serde_json::to_writer(&mut *out, stroke)?;
                writeln!(out)?;
            }
            report(&diagnostics);
        }
        OutputType::Areas => {
            let factor = args.pdf_size.map_or(1.0, |(w, h)| pdf_scale(w, h));
            for group in page_strokes(items) {
                let group = group?;
                let areas: Vec<Rect> = group
                    .strokes
                    .iter()
                    .filter_map(|stroke| stroke_area(stroke, factor))
                    .collect();
                let record = serde_json::json!({
                    "page": group.page.number,
                    "areas": areas,
                });
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let mut out: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout().lock()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("cannot create {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    for input in &args.inputs {
        tracing::debug!(input = %input.display(), "dumping");
        let items = open_items(&args, input)?;
        dump(&args, items, &mut *out)
            .with_context(|| format!("failed to dump {}", input.display()))?;
    }

    out.flush()?;
    Ok(())
}
