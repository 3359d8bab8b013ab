use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fuschia_config::PreviewConfig;
use fuschia_expression::syntax::{
  auto_complete_syntax, is_convertible_to_expression, is_empty_placeholder, is_expression,
  is_testable_expression, split_expression, strip_expression_prefix, unwrap_expression,
};
use fuschia_expression::{Catalog, EvaluationOutcome, MessageResolver, PinDataStore};

/// Fuschia - preview expression results the way the workflow editor shows them
#[derive(Parser)]
#[command(name = "fuschia")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the preview config (default: ~/.fuschia/preview.json, if present)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Render an evaluation outcome as display text
  Preview {
    /// Path to the outcome JSON (reads stdin when omitted)
    outcome_file: Option<PathBuf>,

    /// Treat the owning node as having run data
    #[arg(long)]
    node_has_run_data: bool,
  },

  /// Print whether an outcome is valid, pending or invalid
  State {
    /// Path to the outcome JSON (reads stdin when omitted)
    outcome_file: Option<PathBuf>,

    /// Report any error as pending
    #[arg(long)]
    ignore_error: bool,
  },

  /// Auto-complete unfinished expression syntax
  Complete {
    text: String,

    /// The parameter uses a specialized editor
    #[arg(long)]
    specialized_editor: bool,
  },

  /// Report the syntax properties of raw parameter text
  Inspect { text: String },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let config = load_config(cli.config)?;

  match cli.command {
    Some(Commands::Preview {
      outcome_file,
      node_has_run_data,
    }) => {
      let outcome = read_outcome(outcome_file)?;
      println!("{}", preview(config, &outcome, node_has_run_data));
    }
    Some(Commands::State {
      outcome_file,
      ignore_error,
    }) => {
      let outcome = read_outcome(outcome_file)?;
      println!("{}", outcome.resolvable_state(ignore_error));
    }
    Some(Commands::Complete {
      text,
      specialized_editor,
    }) => {
      println!(
        "{}",
        auto_complete_syntax(&text, specialized_editor || config.specialized_editor)
      );
    }
    Some(Commands::Inspect { text }) => {
      let report = inspect(&text, config.specialized_editor);
      println!("{}", serde_json::to_string_pretty(&report)?);
    }
    None => {
      println!("fuschia - use --help to see available commands");
    }
  }

  Ok(())
}

fn init_logging(verbose: u8) {
  let level = match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };
  let filter = EnvFilter::try_from_env("FUSCHIA_LOG").unwrap_or_else(|_| EnvFilter::new(level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(verbose >= 2)
    .init();

  debug!(verbose, "logging initialized");
}

fn load_config(path: Option<PathBuf>) -> Result<PreviewConfig> {
  if let Some(path) = path {
    info!(path = %path.display(), "loading preview config");
    return PreviewConfig::load(&path)
      .with_context(|| format!("failed to load config: {}", path.display()));
  }

  let default_path = dirs::home_dir().map(|home| home.join(".fuschia").join("preview.json"));
  match default_path {
    Some(path) if path.is_file() => {
      info!(path = %path.display(), "loading default preview config");
      PreviewConfig::load(&path)
        .with_context(|| format!("failed to load config: {}", path.display()))
    }
    _ => {
      debug!("no preview config found, using defaults");
      Ok(PreviewConfig::default())
    }
  }
}

/// Render `outcome` with the config's messages and pin data. The flag turns on
/// run data even when the config leaves it off.
fn preview(config: PreviewConfig, outcome: &EvaluationOutcome, node_has_run_data: bool) -> String {
  let catalog = Catalog::english().with_overrides(config.messages);
  let pin_data: PinDataStore = config.pin_data.into();
  let resolver = MessageResolver::new(catalog, pin_data);
  resolver.stringify(outcome, node_has_run_data || config.node_has_run_data)
}

fn read_outcome(path: Option<PathBuf>) -> Result<EvaluationOutcome> {
  let content = match path {
    Some(path) => std::fs::read_to_string(&path)
      .with_context(|| format!("failed to read outcome file: {}", path.display()))?,
    None => {
      let mut input = String::new();
      io::stdin()
        .read_to_string(&mut input)
        .context("failed to read outcome from stdin")?;
      input
    }
  };

  serde_json::from_str(&content).context("failed to parse evaluation outcome JSON")
}

fn inspect(text: &str, specialized_editor: bool) -> serde_json::Value {
  let segments = split_expression(strip_expression_prefix(Some(text)));
  let code_segments = segments.iter().filter(|segment| segment.is_code()).count();

  serde_json::json!({
    "is_expression": is_expression(text),
    "is_empty_placeholder": is_empty_placeholder(text),
    "is_convertible": is_convertible_to_expression(text, specialized_editor),
    "is_testable": is_testable_expression(text),
    "unwrapped": unwrap_expression(text),
    "completed": auto_complete_syntax(text, specialized_editor),
    "code_segments": code_segments,
    "segments": segments,
  })
}
