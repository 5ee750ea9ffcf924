use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use docalign::chunk::chunk_document;
use docalign::config::Config;
use docalign::model::Document;
use docalign::run::{AlignmentRun, run_alignment};

#[derive(Parser)]
#[command(name = "docalign", version, about = "Align two documents using a saved oracle payload")]
struct Cli {
    /// Path to the JSON config file
    #[arg(long, global = true, default_value = "config.json")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a full comparison: units, pairings, evidence anchoring, rendering
    Compare {
        /// Left (original) document
        left: PathBuf,
        /// Right (variant) document
        right: PathBuf,
        /// Saved oracle response payload
        #[arg(long)]
        response: PathBuf,
        /// Emit the whole run as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// Print the overlapping chunk windows that would be sent to the oracle
    Chunks {
        document: PathBuf,
        #[arg(long)]
        chunk_words: Option<usize>,
        #[arg(long)]
        overlap_words: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // 1. Load and validate config
    let config = Config::load(&cli.config)?;
    config.validate()?;

    match cli.command {
        Command::Compare {
            left,
            right,
            response,
            json,
        } => {
            // 2. Read both documents and the saved payload
            let left_doc = read_document(&left)?;
            let right_doc = read_document(&right)?;
            let payload = fs::read_to_string(&response)
                .with_context(|| format!("failed to read oracle payload: {}", response.display()))?;

            // 3. Run the pipeline
            let run = run_alignment(&config, &left_doc, &right_doc, &payload)?;

            // 4. Report
            if json {
                println!("{}", serde_json::to_string_pretty(&run)?);
            } else {
                print_report(&left_doc, &right_doc, &run);
            }
        }
        Command::Chunks {
            document,
            chunk_words,
            overlap_words,
        } => {
            let doc = read_document(&document)?;
            let chunks = chunk_document(
                &doc.text,
                chunk_words.unwrap_or(config.chunk_words),
                overlap_words.unwrap_or(config.overlap_words),
            )?;
            println!("{} chunks for {}", chunks.len(), doc.id);
            for c in &chunks {
                println!(
                    "  #{} words [{}, {}) — {} chars",
                    c.index,
                    c.start_word,
                    c.end_word,
                    c.text.len()
                );
            }
        }
    }

    Ok(())
}

fn read_document(path: &PathBuf) -> Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read document: {}", path.display()))?;
    let id = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(Document::new(id, text))
}

fn print_report(left: &Document, right: &Document, run: &AlignmentRun) {
    if let Some(dt) = &run.document_type {
        println!("Document type: {} (confidence: {})", dt.label, dt.confidence);
    }

    println!("\nPairings ({}):", run.pairings.len());
    for p in &run.pairings {
        println!(
            "  #{} [{}] {} {}  left: {}  right: {}",
            p.pairing_id,
            p.confidence,
            p.color,
            p.label,
            if p.left_units.is_empty() {
                "-".to_string()
            } else {
                p.left_units.join(", ")
            },
            if p.right_units.is_empty() {
                "-".to_string()
            } else {
                p.right_units.join(", ")
            },
        );
    }

    print_side(&left.id, run.left_units.len(), &run.left_segments);
    print_side(&right.id, run.right_units.len(), &run.right_segments);
}

fn print_side(name: &str, unit_count: usize, segments: &[docalign::model::Segment]) {
    println!("\n── {name} ({unit_count} units) ──");
    for s in segments {
        match s.pairing_id {
            Some(id) => print!("[#{id}|{}]", s.text),
            None => print!("{}", s.text),
        }
    }
    println!();
}
