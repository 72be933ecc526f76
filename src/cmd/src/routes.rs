use std::path::PathBuf;

use indicatif::ProgressBar;
use routes_meta::aggregate::Aggregator;
use routes_meta::aggregate::DocumentGroup;
use routes_meta::config::SourceConfig;
use routes_meta::loader;
use routes_meta::report;
use tracing::info;
use tracing::warn;

use crate::error::Result;

pub struct Config {
    pub training_path: PathBuf,
    pub eval_path: PathBuf,
    pub out_path: PathBuf,
}

fn load_group(paths: &[PathBuf]) -> DocumentGroup {
    let docs = paths
        .iter()
        .map(|path| {
            let doc = loader::load(path);
            info!("{}: {} entries", path.display(), doc.len());
            doc
        })
        .collect();

    DocumentGroup::new(docs)
}

pub fn run(cfg: Config) -> Result<()> {
    info!("processing last-mile meta-data documents...");

    let sources = SourceConfig {
        training_root: cfg.training_path,
        eval_root: cfg.eval_path,
    };
    let paths = sources.document_paths();

    let aggregator = Aggregator::new(
        load_group(&paths.route_data),
        load_group(&paths.package_data),
        load_group(&paths.sequences),
    );

    let route_ids = aggregator.route_ids();
    if route_ids.is_empty() {
        warn!("no route ids found in any source document, nothing to do");
        return Ok(());
    }
    info!("processing {} unique route ids", route_ids.len());

    let pb = ProgressBar::new(route_ids.len() as u64);
    let summaries = route_ids
        .iter()
        .filter_map(|id| {
            pb.inc(1);
            aggregator.summarize(id)
        })
        .collect::<Vec<_>>();
    pb.finish_and_clear();

    if summaries.is_empty() {
        warn!("no route had both route and package details, nothing to write");
        return Ok(());
    }

    common::output::write_csv(&cfg.out_path, &summaries)?;
    info!("{} routes saved to {}", summaries.len(), cfg.out_path.display());

    report::log_summary(&summaries);

    Ok(())
}
