use domsplit::engine::config::{DEFAULT_CUTOFF_ANGSTROMS, ScanStrategy};

pub struct DefaultsConfig {
    pub cutoff: f64,
    pub chain_id: char,
    pub atom_name: String,
    pub strategy: ScanStrategy,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF_ANGSTROMS,
            chain_id: 'A',
            atom_name: "CA".to_string(),
            strategy: ScanStrategy::Incremental,
        }
    }
}
