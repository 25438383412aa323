//! Factgate CLI - run the fact-verification pipeline from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use factgate_gatekeeper::Gatekeeper;
use factgate_llm::OpenAiProvider;
use factgate_pipeline::{FactCheckResult, FactChecker, PipelineConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Fact-verification gate for property-market articles.
#[derive(Debug, Parser)]
#[command(name = "factgate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Pipeline configuration file (TOML); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the full pipeline over an article file
    Check {
        /// Path to the article text file
        file: PathBuf,

        /// Article title, forwarded to the extractor
        #[arg(short, long)]
        title: Option<String>,

        /// Oracle model to use
        #[arg(short, long, default_value = "gpt-4o-mini")]
        model: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run only the deterministic domain rules (no oracle involved)
    Lint {
        /// Path to the article text file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run().await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Check {
            file,
            title,
            model,
            json,
        } => {
            let article = read_article(&file)?;
            let provider = OpenAiProvider::from_env(model)?;
            let checker = FactChecker::new(Arc::new(provider), config)?;

            let result = checker.check_article(&article, title.as_deref()).await?;

            if json {
                print_json(&result)?;
            } else {
                print_summary(&result);
            }

            Ok(if result.is_accurate { 0 } else { 1 })
        }
        Command::Lint { file } => {
            let article = read_article(&file)?;
            let gatekeeper = Gatekeeper::new(config.rules);

            let warnings = gatekeeper.validate(&article);
            if warnings.is_empty() {
                println!("No domain rule findings.");
            } else {
                println!("{} finding(s):", warnings.len());
                for warning in &warnings {
                    println!("  - {}", warning);
                }
            }

            // Findings are advisory; lint never gates
            Ok(0)
        }
    }
}

fn read_article(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read article file {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            PipelineConfig::from_toml(&raw).map_err(|e| anyhow::anyhow!(e))
        }
        None => Ok(PipelineConfig::default()),
    }
}

fn print_summary(result: &FactCheckResult) {
    let gate = if result.is_accurate {
        "PASS"
    } else {
        "FAIL"
    };
    println!("Score: {}/100 ({})", result.score, gate);

    if !result.issues.is_empty() {
        println!("\nIssues:");
        for issue in &result.issues {
            println!("  - {}", issue);
        }
    }

    if !result.verified_facts.is_empty() {
        println!("\nClaims:");
        for fact in &result.verified_facts {
            println!("  [{}] {} ({:.2})", fact.status, fact.claim, fact.confidence);
        }
    }

    if !result.sources.is_empty() {
        println!("\nSources: {}", result.sources.join(", "));
    }
}

fn print_json(result: &FactCheckResult) -> Result<()> {
    let facts: Vec<_> = result
        .verified_facts
        .iter()
        .map(|fact| {
            serde_json::json!({
                "claim": fact.claim,
                "status": fact.status.as_str(),
                "source": fact.source,
                "correction": fact.correction,
                "confidence": fact.confidence,
            })
        })
        .collect();

    let payload = serde_json::json!({
        "is_accurate": result.is_accurate,
        "score": result.score,
        "issues": result.issues,
        "verified_facts": facts,
        "sources": result.sources,
    });

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_load_config_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config.scoring.score_floor, 80);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[rules]\ncurrent_year = 2030").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.rules.current_year, 2030);
        assert_eq!(config.scoring.score_floor, 80);
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let result = load_config(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }
}
