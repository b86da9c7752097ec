use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use oddsmatch::cleanse::Thresholds;
use oddsmatch::{archive, cleanse, print};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// CSV archive to cleanse
    #[clap(short = 'f', long)]
    file: PathBuf,

    /// where to write the cleansed archive
    #[clap(short = 'o', long)]
    out: PathBuf,

    /// drop columns missing from at least this share of matches
    #[clap(long, default_value = "0.99")]
    null_threshold: f64,

    /// drop columns with at most this many distinct quotes
    #[clap(long, default_value = "1")]
    unique_threshold: usize,

    /// print the profile of every dropped column
    #[clap(short = 'v', long)]
    verbose: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.null_threshold) {
            bail!("null threshold must be in [0, 1]");
        }
        if self.file == self.out {
            bail!("cannot cleanse an archive in place");
        }
        Ok(())
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

    let mut dataset = archive::read_dataset(&args.file)?;
    cleanse::retain_quoted(&mut dataset)?;

    let thresholds = Thresholds {
        null_ratio: args.null_threshold,
        distinct: args.unique_threshold,
    };
    if args.verbose {
        let profiles = cleanse::profile(&dataset)
            .into_iter()
            .filter(|profile| thresholds.is_low_information(profile))
            .collect::<Vec<_>>();
        info!("Dropped columns:\n{}", Console::default().render(&print::tabulate_profiles(&profiles)));
    }
    cleanse::drop_low_information(&mut dataset, &thresholds);

    archive::write_dataset(&args.out, &dataset)?;
    Ok(())
}
