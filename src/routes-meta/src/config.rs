use std::path::PathBuf;

/// The two dataset roots the nine source documents live under.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub training_root: PathBuf,
    pub eval_root: PathBuf,
}

/// Per document kind, the candidate file locations in resolution order:
/// build, apply, eval.
#[derive(Debug, Clone)]
pub struct DocumentPaths {
    pub route_data: Vec<PathBuf>,
    pub package_data: Vec<PathBuf>,
    pub sequences: Vec<PathBuf>,
}

impl SourceConfig {
    pub fn document_paths(&self) -> DocumentPaths {
        DocumentPaths {
            route_data: vec![
                self.training_root
                    .join("model_build_inputs")
                    .join("route_data.json"),
                self.training_root
                    .join("model_apply_inputs")
                    .join("new_route_data.json"),
                self.eval_root
                    .join("model_apply_inputs")
                    .join("eval_route_data.json"),
            ],
            package_data: vec![
                self.training_root
                    .join("model_build_inputs")
                    .join("package_data.json"),
                self.training_root
                    .join("model_apply_inputs")
                    .join("new_package_data.json"),
                self.eval_root
                    .join("model_apply_inputs")
                    .join("eval_package_data.json"),
            ],
            sequences: vec![
                self.training_root
                    .join("model_build_inputs")
                    .join("actual_sequences.json"),
                self.training_root
                    .join("model_score_inputs")
                    .join("new_actual_sequences.json"),
                self.eval_root
                    .join("model_score_inputs")
                    .join("eval_actual_sequences.json"),
            ],
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            training_root: PathBuf::from("data/last_mile_raw/almrrc2021-data-training"),
            eval_root: PathBuf::from("data/last_mile_raw/almrrc2021-data-evaluation"),
        }
    }
}
