//! implore-pick - select points of binned datasets by pattern
//!
//! ```text
//! implore-pick select --points bins.csv --selection keep.sel
//! implore-pick select --points bins.json -e '/foo#2:' -e '/bar@0.5:1.5'
//! implore-pick check --selection keep.sel
//! ```

mod points;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use implore_pointmatch::{PathMode, PatternMatcher, SelectionConfig, SelectionList};
use tracing_subscriber::EnvFilter;

use points::load_points;

#[derive(Parser)]
#[command(name = "implore-pick")]
#[command(about = "Select histogram bins and scatter points by path and index/position patterns")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the points accepted by the patterns as JSON
    Select {
        /// Point table (.json array or .csv with path,n,xmin,xmax[,value])
        #[arg(short, long)]
        points: PathBuf,

        #[command(flatten)]
        patterns: PatternArgs,

        /// Match path expressions anywhere in the path instead of from the start
        #[arg(long)]
        search: bool,

        /// Output file. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compile the patterns and print their compiled form
    Check {
        #[command(flatten)]
        patterns: PatternArgs,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct PatternArgs {
    /// Selection file, one pattern per line
    #[arg(short, long)]
    selection: Option<PathBuf>,

    /// Pattern given directly (repeatable)
    #[arg(short = 'e', long = "pattern")]
    patterns: Vec<String>,
}

impl PatternArgs {
    fn build(&self, config: &SelectionConfig) -> Result<SelectionList, Box<dyn std::error::Error>> {
        if let Some(path) = &self.selection {
            return Ok(SelectionList::load(path, config)?);
        }

        let matchers = self
            .patterns
            .iter()
            .map(|p| PatternMatcher::compile_with(p, config.matching))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SelectionList::new(matchers))
    }
}

/// Points of the table at `points` accepted by `list`, as pretty JSON
fn select_json(list: &SelectionList, points: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let points = load_points(points)?;
    let selected = list.select_points(&points);
    tracing::info!("Selected {} of {} points", selected.len(), points.len());
    Ok(serde_json::to_string_pretty(&selected)?)
}

/// One line per compiled pattern, then a summary line
fn write_check<W: Write>(list: &SelectionList, out: &mut W) -> io::Result<()> {
    for m in list {
        writeln!(
            out,
            "{}\tpath={}\tselector={:?}",
            m,
            m.path_expr().unwrap_or(""),
            m.selector()
        )?;
    }
    writeln!(out, "{} pattern(s) OK", list.len())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => SelectionConfig::load(path)?,
        None => SelectionConfig::default(),
    };

    match cli.command {
        Commands::Select {
            points,
            patterns,
            search,
            output,
        } => {
            if search {
                config.matching.path_mode = PathMode::Search;
            }
            let list = patterns.build(&config)?;
            if list.is_empty() {
                tracing::warn!("No patterns given, nothing will be selected");
            }

            let json = select_json(&list, &points)?;
            match output {
                Some(path) => {
                    let mut file = File::create(&path)?;
                    writeln!(file, "{}", json)?;
                }
                None => println!("{}", json),
            }
        }

        Commands::Check { patterns } => {
            let list = patterns.build(&config)?;
            write_check(&list, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
