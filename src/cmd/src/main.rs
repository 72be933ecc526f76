use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use tracing::metadata::LevelFilter;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::error::Result;

mod error;
mod orders;
mod routes;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(value_enum, default_value = "info")]
    log_level: LogLevel,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Synthesize the simulated orders dataset
    Orders {
        #[arg(long, default_value = "data/us_zip_codes.csv")]
        zip_codes_path: PathBuf,
        #[arg(long, default_value = "data/simulated_orders.csv")]
        out_path: PathBuf,
        #[arg(long, default_value = "100000")]
        num_orders: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Flatten raw route/package documents into per-route summaries
    Routes {
        #[arg(long, default_value = "data/last_mile_raw/almrrc2021-data-training")]
        training_path: PathBuf,
        #[arg(long, default_value = "data/last_mile_raw/almrrc2021-data-evaluation")]
        eval_path: PathBuf,
        #[arg(
            long,
            default_value = "data/processed_last_mile_meta/processed_meta_routes.csv"
        )]
        out_path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match cli.cmd {
        Cmd::Orders {
            zip_codes_path,
            out_path,
            num_orders,
            seed,
        } => orders::run(orders::Config {
            zip_codes_path,
            out_path,
            num_orders,
            seed,
        })?,
        Cmd::Routes {
            training_path,
            eval_path,
            out_path,
        } => routes::run(routes::Config {
            training_path,
            eval_path,
            out_path,
        })?,
    }

    Ok(())
}
