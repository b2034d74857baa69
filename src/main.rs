//! Skein CLI - pipeline graph analyzer

use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};
use colored::Colorize;

use skein::error::{FixSuggestion, SkeinError};
use skein::{analyze, validate_strict, Pipeline, PipelineGraph};

#[derive(Parser)]
#[command(name = "skein")]
#[command(about = "Skein - pipeline graph analyzer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a pipeline file: node/edge counts and DAG check
    Analyze {
        /// Path to a pipeline file (.json, .yaml or .yml)
        file: String,

        /// Print the raw analysis record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a pipeline file, failing if it contains a cycle
    Check {
        /// Path to a pipeline file (.json, .yaml or .yml)
        file: String,

        /// Also reject duplicate node ids and dangling edge endpoints
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { file, json } => analyze_pipeline(&file, json),
        Commands::Check { file, strict } => check_pipeline(&file, strict),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

/// Read and parse a pipeline document, picking the format by extension
/// (`.yaml`/`.yml` are YAML, everything else is JSON).
fn load_pipeline(file: &str) -> Result<Pipeline, SkeinError> {
    let path = Path::new(file);
    if !path.exists() {
        return Err(SkeinError::PipelineNotFound {
            path: file.to_string(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    let pipeline = if is_yaml {
        serde_yaml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };

    Ok(pipeline)
}

fn analyze_pipeline(file: &str, json: bool) -> Result<(), SkeinError> {
    let pipeline = load_pipeline(file)?;
    let analysis = analyze(&pipeline);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{} {}", "→".cyan(), file.cyan().bold());
    println!("  Nodes: {}", analysis.num_nodes);
    println!("  Edges: {}", analysis.num_edges);
    println!(
        "  DAG:   {}",
        if analysis.is_dag {
            "yes".green()
        } else {
            "no".red()
        }
    );

    Ok(())
}

fn check_pipeline(file: &str, strict: bool) -> Result<(), SkeinError> {
    let pipeline = load_pipeline(file)?;

    if strict {
        validate_strict(&pipeline)?;
    }

    let graph = PipelineGraph::from_pipeline(&pipeline);
    graph.detect_cycles()?;

    println!("{} Pipeline '{}' is acyclic", "✓".green(), file);
    println!("  Nodes: {}", pipeline.nodes.len());
    println!("  Edges: {}", pipeline.edges.len());

    Ok(())
}
