use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error, trace};
use wordreduce::config::{ConfigLayer, ConfigLoader, WordReduceConfig};
use wordreduce::input::InputSource;
use wordreduce::mapreduce::{
    plan_chunk_ranges, ExecutorConfig, FormatType, MapReduceExecutor, OutputFormatter,
};

/// Count words across many documents with a parallel map-reduce
#[derive(Parser)]
#[command(name = "wordreduce")]
#[command(about = "Parallel word-frequency map-reduce over text documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count words in the given documents
    Run {
        /// Document files, one document per file
        #[arg(required_unless_present = "input", conflicts_with = "input")]
        files: Vec<PathBuf>,

        /// List file (.json array, .yaml sequence, or one document per line)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        options: RunOptions,
    },
    /// Count words in the built-in sample documents
    Demo {
        #[command(flatten)]
        options: RunOptions,
    },
    /// Show how the documents would be split into chunks
    Plan {
        /// Document files, one document per file
        #[arg(required_unless_present = "input", conflicts_with = "input")]
        files: Vec<PathBuf>,

        /// List file (.json array, .yaml sequence, or one document per line)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Target number of chunks
        #[arg(short = 'k', long)]
        chunks: Option<usize>,
    },
}

#[derive(Args)]
struct RunOptions {
    /// Target number of chunks (default: 4)
    #[arg(short = 'k', long)]
    chunks: Option<usize>,

    /// Number of top words to report (default: 10)
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Maximum number of chunks mapped at once
    #[arg(short = 'p', long)]
    max_parallel: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<FormatType>,
}

impl RunOptions {
    fn as_layer(&self) -> ConfigLayer {
        ConfigLayer {
            chunk_count: self.chunks,
            top_n: self.top,
            max_parallel: self.max_parallel,
            format: self.format,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("wordreduce started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Commands::Run {
            files,
            input,
            options,
        } => run_mapreduce(source_from(files, input), &options, cli.config).await,
        Commands::Demo { options } => {
            run_mapreduce(InputSource::Demo, &options, cli.config).await
        }
        Commands::Plan {
            files,
            input,
            chunks,
        } => run_plan(source_from(files, input), chunks, cli.config).await,
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn source_from(files: Vec<PathBuf>, input: Option<PathBuf>) -> InputSource {
    match input {
        Some(path) => InputSource::List(path),
        None => InputSource::Files(files),
    }
}

async fn load_config(
    path: Option<PathBuf>,
    overrides: &ConfigLayer,
) -> anyhow::Result<WordReduceConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = path {
        loader = loader.with_explicit_path(path);
    }

    let mut config = loader
        .load()
        .await
        .context("Failed to load configuration")?;
    config.apply(overrides);
    config.validate()?;

    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

async fn run_mapreduce(
    source: InputSource,
    options: &RunOptions,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = load_config(config_path, &options.as_layer()).await?;
    let documents = source.load().await.context("Failed to load documents")?;

    let executor = MapReduceExecutor::new(ExecutorConfig::from(&config));
    let outcome = executor.run(documents).await?;

    let formatter = OutputFormatter::new(config.format);
    print!("{}", formatter.format_outcome(&outcome)?);
    Ok(())
}

async fn run_plan(
    source: InputSource,
    chunks: Option<usize>,
    config_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let overrides = ConfigLayer {
        chunk_count: chunks,
        ..Default::default()
    };
    let config = load_config(config_path, &overrides).await?;
    let documents = source.load().await.context("Failed to load documents")?;

    let ranges = plan_chunk_ranges(documents.len(), config.chunk_count);
    println!(
        "{} documents -> {} chunks (target {})",
        documents.len(),
        ranges.len(),
        config.chunk_count
    );
    for (index, range) in ranges.iter().enumerate() {
        println!(
            "  chunk {}: documents {}..{} ({} documents)",
            index,
            range.start,
            range.end,
            range.len()
        );
    }
    Ok(())
}
