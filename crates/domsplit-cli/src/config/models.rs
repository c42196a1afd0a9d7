use domsplit::engine::config::AnalysisConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub chain_id: char,
    pub atom_name: String,
    pub analysis: AnalysisConfig,
}
