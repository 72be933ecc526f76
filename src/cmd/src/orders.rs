use std::path::PathBuf;

use orders_gen::config::GeneratorConfig;
use orders_gen::report;
use orders_gen::scenario;
use orders_gen::scenario::Scenario;
use orders_gen::zipcodes::ZipCodeProvider;
use orders_gen::zipcodes::ZipCodeSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::error::Result;

pub struct Config {
    pub zip_codes_path: PathBuf,
    pub out_path: PathBuf,
    pub num_orders: usize,
    pub seed: Option<u64>,
}

pub fn run(cfg: Config) -> Result<()> {
    info!("starting order generation...");

    let params = GeneratorConfig {
        num_orders: cfg.num_orders,
        ..Default::default()
    };
    let zip_codes = ZipCodeProvider::new(ZipCodeSource::load(&cfg.zip_codes_path));
    let rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut scenario = Scenario::new(scenario::Config {
        rng,
        params,
        zip_codes,
    })?;
    let orders = scenario.run();

    common::output::write_csv(&cfg.out_path, &orders)?;
    info!("{} orders saved to {}", orders.len(), cfg.out_path.display());

    report::log_summary(&orders);

    Ok(())
}
