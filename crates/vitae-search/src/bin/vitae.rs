//! vitae - search a directory of extracted CV text files.
//!
//! Usage:
//!   vitae --dir ./corpus --keywords "python,sql,golang"
//!   vitae --dir ./corpus --keywords react --algorithm aho_corasick --top 10
//!   vitae --dir ./corpus --keywords sql --json
//!
//! Each `.txt` file in the directory becomes one document; the file stem
//! is used as the role tag. Text is normalized before matching.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitae_core::{normalize_text, Document};
use vitae_search::{Algorithm, SearchConfig, SearchEngine};
use vitae_store::InMemoryStore;

#[derive(Debug)]
struct Args {
    dir: PathBuf,
    keywords: String,
    config: SearchConfig,
    json: bool,
}

fn print_usage() {
    eprintln!(
        "Usage: vitae --dir <path> --keywords <csv> \
         [--algorithm kmp|boyer_moore|aho_corasick] [--top <n>] \
         [--max-distance <d>] [--json]"
    );
}

fn parse_args() -> anyhow::Result<Args> {
    let argv: Vec<String> = std::env::args().collect();

    let mut dir: Option<PathBuf> = None;
    let mut keywords: Option<String> = None;
    let mut config = SearchConfig::from_env();
    let mut json = false;

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--dir" | "-d" => {
                i += 1;
                dir = Some(PathBuf::from(argv.get(i).context("--dir needs a value")?));
            }
            "--keywords" | "-k" => {
                i += 1;
                keywords = Some(argv.get(i).context("--keywords needs a value")?.clone());
            }
            "--algorithm" | "-a" => {
                i += 1;
                let name = argv.get(i).context("--algorithm needs a value")?;
                config.algorithm = name.parse::<Algorithm>()?;
            }
            "--top" | "-n" => {
                i += 1;
                config.top_n = argv
                    .get(i)
                    .context("--top needs a value")?
                    .parse()
                    .context("--top must be a non-negative integer")?;
            }
            "--max-distance" => {
                i += 1;
                config.fuzzy.max_distance = argv
                    .get(i)
                    .context("--max-distance needs a value")?
                    .parse()
                    .context("--max-distance must be a non-negative integer")?;
            }
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                print_usage();
                bail!("unknown argument: {other}");
            }
        }
        i += 1;
    }

    let dir = dir.context("--dir is required")?;
    let keywords = keywords.context("--keywords is required")?;

    Ok(Args {
        dir,
        keywords,
        config,
        json,
    })
}

/// Initialize tracing with configurable output.
///
/// Environment variables:
///   LOG_FORMAT - "json" or "text" (default: "text")
///   RUST_LOG   - standard env filter (default: "vitae=info")
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitae=info".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Load every `.txt` file in the directory as a normalized document.
fn load_corpus(dir: &PathBuf) -> anyhow::Result<Vec<Document>> {
    let mut documents = Vec::new();

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("cannot read corpus directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let role = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        documents
            .push(Document::new(role, normalize_text(&raw)).with_path(path.display().to_string()));
    }

    Ok(documents)
}


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = parse_args()?;
    let documents = load_corpus(&args.dir)?;
    if documents.is_empty() {
        bail!("no .txt files found in {}", args.dir.display());
    }
    info!(document_count = documents.len(), "corpus loaded");

    let engine = SearchEngine::new(Arc::new(InMemoryStore::new(documents)));
    let response = engine.search(&args.keywords, &args.config).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!(
        "Scanned {} documents with {} (exact {} ms, fuzzy {} ms)",
        response.total_documents,
        args.config.algorithm,
        response.exact_elapsed_ms,
        response.fuzzy_elapsed_ms
    );

    if response.hits.is_empty() {
        println!("No matching documents.");
        return Ok(());
    }

    for (rank, hit) in response.hits.iter().enumerate() {
        println!(
            "{:>3}. {:<24} total={:<5} {}",
            rank + 1,
            hit.role,
            hit.total,
            hit.path.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
