pub mod contacts;
pub mod scan;

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use domsplit::core::io::pdb::{PdbCaReader, PdbMetadata};
use domsplit::core::io::traits::CoordinateSource;
use domsplit::core::models::trace::CaTrace;
use tracing::info;

fn load_trace(config: &AppConfig) -> Result<(CaTrace, PdbMetadata)> {
    info!(
        "Loading '{}' atoms of chain '{}' from {:?}",
        config.atom_name, config.chain_id, &config.input_path
    );
    let reader = PdbCaReader::new(config.chain_id).with_atom_name(config.atom_name.as_str());
    reader
        .read_from_path(&config.input_path)
        .map_err(|e| CliError::FileParsing {
            path: config.input_path.clone(),
            source: e.into(),
        })
}
