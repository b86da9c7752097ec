use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use oddsmatch::archive;
use oddsmatch::config::Config;
use oddsmatch::engine::Engine;
use oddsmatch::file::FromJsonFile;
use oddsmatch::print;
use oddsmatch::similarity::MetricKind;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// CSV archive of settled and pending matches
    #[clap(short = 'f', long)]
    file: PathBuf,

    /// label of the run, used to name the output files
    #[clap(short = 'l', long)]
    label: String,

    /// directory to write the output files to
    #[clap(short = 'o', long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON config file; flags override its settings
    #[clap(long)]
    config: Option<PathBuf>,

    /// maximum number of neighbours per pending match
    #[clap(short = 'k', long)]
    neighbours: Option<usize>,

    /// minimum expected value (exclusive) of a retained bet
    #[clap(long)]
    ev_threshold: Option<f64>,

    /// distance between quoted odds
    #[clap(long, value_enum)]
    metric: Option<MetricKind>,

    /// shuffle the archive with this seed before scoring
    #[clap(long)]
    shuffle_seed: Option<u64>,

    /// score pending matches on a single thread
    #[clap(long)]
    sequential: bool,

    /// number of picks to print
    #[clap(short = 'p', long, default_value = "20")]
    print: usize,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.label.trim().is_empty() {
            bail!("run label cannot be empty");
        }
        if !self.out_dir.is_dir() {
            bail!("output directory {} does not exist", self.out_dir.display());
        }
        Ok(())
    }

    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            None => Config::default(),
            Some(path) => {
                debug!("loading config from {}", path.display());
                Config::from_json_file(path)?
            }
        };
        if let Some(neighbours) = self.neighbours {
            config.neighbours = neighbours;
        }
        if let Some(ev_threshold) = self.ev_threshold {
            config.ev_threshold = ev_threshold;
        }
        if let Some(metric) = self.metric {
            config.metric = metric;
        }
        if let Some(shuffle_seed) = self.shuffle_seed {
            config.shuffle_seed = Some(shuffle_seed);
        }
        if self.sequential {
            config.parallel = false;
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let config = args.config()?;
    info!("config: {config:?}");
    let engine = Engine::try_from(config)?;
    info!("catalog has {} entries", engine.catalog().len());

    let dataset = archive::read_dataset(&args.file)?;
    let report = engine.run(&dataset);
    let paths = archive::write_report(&args.out_dir, &args.label, &report)?;
    for path in &paths {
        debug!("wrote {}", path.display());
    }

    if args.print > 0 {
        info!("Picks by probability:\n{}", Console::default().render(&print::tabulate_picks(&report.by_probability, args.print)));
        info!("Picks by expected bankroll:\n{}", Console::default().render(&print::tabulate_picks(&report.by_bankroll, args.print)));
    }
    Ok(())
}
