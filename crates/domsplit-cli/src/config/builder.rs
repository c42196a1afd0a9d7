use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use domsplit::engine::config::{AnalysisConfigBuilder, ScanStrategy};
use std::str::FromStr;

/// Resolves the run configuration: defaults < config file < `--set` < dedicated flags.
pub fn build_config(args: &InputArgs, strategy: Option<ScanStrategy>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let contacts_file = file_config.contacts.take().unwrap_or_default();
    let selection_file = file_config.selection.take().unwrap_or_default();
    let scan_file = file_config.scan.take().unwrap_or_default();

    let cutoff = args
        .cutoff
        .or(contacts_file.cutoff)
        .unwrap_or(defaults.cutoff);
    let chain_id = args
        .chain
        .or(selection_file.chain_id)
        .unwrap_or(defaults.chain_id);
    let atom_name = args
        .atom_name
        .clone()
        .or(selection_file.atom_name)
        .unwrap_or(defaults.atom_name);
    let strategy = strategy
        .or(scan_file.strategy)
        .unwrap_or(defaults.strategy);

    if atom_name.trim().is_empty() {
        return Err(CliError::Config("Atom name must not be empty".to_string()));
    }

    let analysis = AnalysisConfigBuilder::new()
        .cutoff(cutoff)
        .strategy(strategy)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        chain_id,
        atom_name,
        analysis,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key.trim() {
            "contacts.cutoff" => {
                config
                    .contacts
                    .get_or_insert_with(Default::default)
                    .cutoff = Some(parse_value(key, value_str, "float")?);
            }
            "selection.chain-id" => {
                config
                    .selection
                    .get_or_insert_with(Default::default)
                    .chain_id = Some(parse_value(key, value_str, "character")?);
            }
            "selection.atom-name" => {
                config
                    .selection
                    .get_or_insert_with(Default::default)
                    .atom_name = Some(value_str.trim().to_string());
            }
            "scan.strategy" => {
                config.scan.get_or_insert_with(Default::default).strategy =
                    Some(parse_value(key, value_str, "strategy")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
