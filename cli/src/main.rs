//! dochtml CLI - fetch shared-collection documents by name and render them to HTML

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use dochtml::source::RemoteSource;
use dochtml::{Document, Element, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "dochtml")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Fetch shared-collection documents by name and render them to HTML", long_about = None)]
struct Cli {
    /// Document name to fetch and render
    #[arg(value_name = "NAME")]
    name: Option<String>,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    source: ConnectArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document to a complete HTML page
    Html {
        /// Document name to look up in the collection
        #[arg(value_name = "NAME")]
        name: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write document text into the page without HTML escaping
        #[arg(long)]
        raw: bool,

        /// Extra CSS appended to the page stylesheet
        #[arg(long, value_name = "CSS")]
        css: Option<String>,

        #[command(flatten)]
        source: ConnectArgs,
    },

    /// Print the document model as JSON
    Json {
        /// Document name to look up in the collection
        #[arg(value_name = "NAME")]
        name: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        source: ConnectArgs,
    },

    /// Show document information
    Info {
        /// Document name to look up in the collection
        #[arg(value_name = "NAME")]
        name: Option<String>,

        #[command(flatten)]
        source: ConnectArgs,
    },

    /// Show version information
    Version,
}

/// How to reach the document: a saved payload file, or the remote provider.
#[derive(Args)]
struct ConnectArgs {
    /// Read a saved payload file instead of contacting the provider
    #[arg(long, value_name = "FILE")]
    from: Option<PathBuf>,

    /// Bearer token for the provider
    #[arg(long, env = "DOCHTML_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Collection id to search in
    #[arg(long, env = "DOCHTML_COLLECTION_ID", value_name = "ID")]
    collection: Option<String>,

    /// Override the lookup endpoint
    #[arg(long, env = "DOCHTML_SEARCH_URL", value_name = "URL")]
    search_url: Option<String>,

    /// Override the document endpoint
    #[arg(long, env = "DOCHTML_DOCUMENT_URL", value_name = "URL")]
    document_url: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html {
            name,
            output,
            raw,
            css,
            source,
        }) => cmd_html(
            name.as_deref(),
            output.as_deref(),
            raw,
            css.as_deref(),
            &source,
        ),
        Some(Commands::Json {
            name,
            output,
            compact,
            source,
        }) => cmd_json(name.as_deref(), output.as_deref(), compact, &source),
        Some(Commands::Info { name, source }) => cmd_info(name.as_deref(), &source),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: render to HTML if a name or payload is given
            if cli.name.is_some() || cli.source.from.is_some() {
                cmd_html(
                    cli.name.as_deref(),
                    cli.output.as_deref(),
                    false,
                    None,
                    &cli.source,
                )
            } else {
                println!("{}", "Usage: dochtml <NAME> [OUTPUT]".yellow());
                println!("       dochtml --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(exit_code(&e));
    }
}

/// Map the error taxonomy onto distinguishable exit codes.
fn exit_code(err: &dochtml::Error) -> i32 {
    match err.status_code() {
        400 => 2,
        404 => 3,
        403 => 4,
        500..=599 => 5,
        _ => 1,
    }
}

/// Obtain the document from a payload file or the remote provider.
fn load_document(name: Option<&str>, args: &ConnectArgs) -> dochtml::Result<Document> {
    if let Some(ref path) = args.from {
        log::debug!("Loading saved payload from {}", path.display());
        return dochtml::parse_json_file(path);
    }

    let name = match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(dochtml::Error::InputMissing),
    };
    let token = args
        .token
        .clone()
        .ok_or_else(|| dochtml::Error::ConfigurationMissing("DOCHTML_TOKEN".to_string()))?;
    let collection = args.collection.clone().ok_or_else(|| {
        dochtml::Error::ConfigurationMissing("DOCHTML_COLLECTION_ID".to_string())
    })?;

    let mut source = RemoteSource::new(token);
    if let Some(ref url) = args.search_url {
        source = source.with_search_url(url);
    }
    if let Some(ref url) = args.document_url {
        source = source.with_document_url(url);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Fetching \"{}\"...", name));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = dochtml::fetch_document(&source, name, &collection);
    spinner.finish_and_clear();
    result
}

fn cmd_html(
    name: Option<&str>,
    output: Option<&Path>,
    raw: bool,
    css: Option<&str>,
    source: &ConnectArgs,
) -> dochtml::Result<()> {
    let doc = load_document(name, source)?;

    let mut options = RenderOptions::new().with_escaping(!raw);
    if let Some(css) = css {
        options = options.with_extra_css(css);
    }

    let html = dochtml::render::to_html(&doc, &options);

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_json(
    name: Option<&str>,
    output: Option<&Path>,
    compact: bool,
    source: &ConnectArgs,
) -> dochtml::Result<()> {
    let doc = load_document(name, source)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = dochtml::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(name: Option<&str>, source: &ConnectArgs) -> dochtml::Result<()> {
    let doc = load_document(name, source)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Title".bold(), doc.title);
    println!("{}: {}", "Elements".bold(), doc.element_count());

    let mut paragraphs = 0;
    let mut headings = 0;
    let mut tables = 0;
    for element in &doc.elements {
        match element {
            Element::Paragraph(p) if p.is_heading() => headings += 1,
            Element::Paragraph(_) => paragraphs += 1,
            Element::Table(_) => tables += 1,
        }
    }

    println!("{}: {}", "Paragraphs".bold(), paragraphs);
    println!("{}: {}", "Headings".bold(), headings);
    println!("{}: {}", "Tables".bold(), tables);

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = doc.plain_text();
    let words: usize = text.split_whitespace().count();

    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), text.len());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "dochtml".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Structured document to HTML renderer");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/dochtml".dimmed()
    );
    println!("License: MIT");
}
