//! sentiscope CLI: sentiment, emotion and aspect analysis.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use sentiscope::aspect::AspectEvidence;
use sentiscope::batch;
use sentiscope::config::AnalyzerConfig;
use sentiscope::engine::{AnalysisResult, Analyzer};
use sentiscope::paths::SentiPaths;
use sentiscope::sentiment::Classification;
use sentiscope::store::AnalysisStore;

#[derive(Parser)]
#[command(
    name = "sentiscope",
    version,
    about = "Sentiment, emotion and aspect analysis"
)]
struct Cli {
    /// Data directory for the analysis history.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (defaults to config.toml in the config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emotion model endpoint, overriding the config file.
    #[arg(long, global = true)]
    emotion_endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse one text.
    Analyze {
        /// The text to analyse.
        text: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
        /// Save the result to the history.
        #[arg(long)]
        save: bool,
    },

    /// Analyse every record of a JSON or JSON-lines file.
    Batch {
        /// Path to the input file (objects with a "text" field).
        #[arg(long)]
        file: PathBuf,
        /// Save every result to the history.
        #[arg(long)]
        save: bool,
        /// Print results as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Inspect or manage saved analyses.
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List saved analyses, newest first.
    List,
    /// Show one saved analysis.
    Show {
        /// Analysis id.
        id: u64,
    },
    /// Delete one saved analysis.
    Delete {
        /// Analysis id.
        id: u64,
    },
    /// Delete every saved analysis.
    Clear,
    /// Sentiment distribution and timeline.
    Stats,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = match &cli.data_dir {
        Some(dir) => SentiPaths::with_data_dir(dir.clone()),
        None => SentiPaths::resolve()?,
    };
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::load_or_default(&paths.config_file())?,
    };
    if let Some(endpoint) = cli.emotion_endpoint {
        config.emotion.endpoint = Some(endpoint);
    }

    match cli.command {
        Commands::Analyze { text, json, save } => {
            let analyzer = Analyzer::new(&config)?;
            let result = analyzer.analyze(&text);
            if save {
                let store = open_store(&paths)?;
                let id = store.save(&result)?;
                eprintln!("Saved analysis #{id}");
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&result).into_diagnostic()?);
            } else {
                print_analysis(&result);
            }
        }

        Commands::Batch { file, save, json } => {
            let report = batch::load_records(&file)?;
            if report.texts.is_empty() {
                miette::bail!(
                    "no analysable records in {} ({} skipped)",
                    file.display(),
                    report.skipped.len()
                );
            }

            let analyzer = Analyzer::new(&config)?;
            let results = analyzer.analyze_batch(&report.texts);

            if save {
                let store = open_store(&paths)?;
                for result in &results {
                    store.save(result)?;
                }
                eprintln!("Saved {} analyses", results.len());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
            } else {
                for (i, result) in results.iter().enumerate() {
                    println!(
                        "{:>4}. {:<8} {:+.3}  {}",
                        i + 1,
                        result.sentiment.classification,
                        result.sentiment.compound,
                        sentiscope::store::preview(&result.text)
                    );
                }
                let mut counts = sentiscope::store::SentimentDistribution::default();
                for result in &results {
                    counts.record(result.sentiment.classification);
                }
                println!(
                    "\nAnalysed {} of {} records ({} skipped): {} positive, {} neutral, {} negative",
                    results.len(),
                    report.total(),
                    report.skipped.len(),
                    counts.positive,
                    counts.neutral,
                    counts.negative
                );
            }
        }

        Commands::History { action } => {
            let store = open_store(&paths)?;

            match action {
                HistoryAction::List => {
                    let records = store.list_all()?;
                    if records.is_empty() {
                        println!("No saved analyses.");
                    } else {
                        println!("Saved analyses ({}):", records.len());
                        for stored in &records {
                            println!(
                                "  #{:<5} {}  {:<8} {:+.3}  {}",
                                stored.id,
                                stored.analysis.timestamp.format("%Y-%m-%d %H:%M:%S"),
                                stored.analysis.sentiment.classification,
                                stored.analysis.sentiment.compound,
                                sentiscope::store::preview(&stored.analysis.text)
                            );
                        }
                    }
                }

                HistoryAction::Show { id } => match store.get(id)? {
                    Some(stored) => {
                        println!(
                            "Analysis #{} (saved {})",
                            stored.id,
                            stored.stored_at.format("%Y-%m-%d %H:%M:%S")
                        );
                        print_analysis(&stored.analysis);
                    }
                    None => miette::bail!("no saved analysis with id {id}"),
                },

                HistoryAction::Delete { id } => {
                    if store.delete_by_id(id)? {
                        println!("Deleted analysis #{id}");
                    } else {
                        miette::bail!("no saved analysis with id {id}");
                    }
                }

                HistoryAction::Clear => {
                    let count = store.delete_all()?;
                    println!("Deleted {count} analyses");
                }

                HistoryAction::Stats => {
                    let distribution = store.distribution()?;
                    let total = distribution.total();
                    println!("Saved analyses: {total}");
                    for class in [
                        Classification::Positive,
                        Classification::Neutral,
                        Classification::Negative,
                    ] {
                        let n = distribution.get(class);
                        let pct = if total == 0 {
                            0.0
                        } else {
                            100.0 * n as f64 / total as f64
                        };
                        println!("  {:<8} {n:>5} ({pct:.1}%)", class);
                    }

                    let history = store.history()?;
                    if !history.is_empty() {
                        println!("\nTimeline:");
                        for entry in &history {
                            println!(
                                "  {}  {:+.3}  {:<8} {}",
                                entry.timestamp.format("%Y-%m-%d %H:%M"),
                                entry.score,
                                entry.classification,
                                entry.preview
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn open_store(paths: &SentiPaths) -> Result<AnalysisStore> {
    paths.ensure_dirs()?;
    Ok(AnalysisStore::open(&paths.store_dir())?)
}

fn print_analysis(result: &AnalysisResult) {
    let s = &result.sentiment;
    println!("Text: {}", result.text);
    println!(
        "Sentiment: {} (compound {:+.3}, confidence {:.0}%)",
        s.classification,
        s.compound,
        s.confidence * 100.0
    );
    println!(
        "  positive {:.3}  negative {:.3}  neutral {:.3}  subjectivity {:.3}",
        s.positive, s.negative, s.neutral, s.subjectivity
    );

    println!("Emotions (dominant: {}):", result.emotions.dominant());
    for (emotion, value) in result.emotions.iter() {
        println!("  {:<9} {:.2}", emotion.as_str(), value);
    }

    if result.aspects.is_empty() {
        println!("Aspects: none");
    } else {
        println!("Aspects:");
        for aspect in &result.aspects {
            let evidence = match aspect.evidence {
                AspectEvidence::Direct { sentences } => format!("{sentences} segment(s)"),
                AspectEvidence::Inferred => "inferred".to_string(),
            };
            println!(
                "  {:<24} {:<8} {:+.3}  [{}] \"{}\"",
                aspect.term, aspect.sentiment, aspect.score, evidence, aspect.context
            );
        }
    }
}
