use super::load_trace;
use crate::cli::ScanArgs;
use crate::config::build_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use domsplit::core::io::plot;
use domsplit::core::io::report::{CsvReportWriter, TextReportWriter, open_report_file};
use domsplit::engine::progress::ProgressReporter;
use domsplit::workflows;
use std::fs::File;
use std::io;
use tracing::{info, warn};

pub fn run(args: ScanArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_config(&args.input, args.strategy)?;

    let (trace, metadata) = load_trace(&config)?;
    let protein_id = metadata.protein_id.as_deref().unwrap_or("unknown");
    info!(
        "Loaded {} residues of chain '{}' ({}).",
        trace.len(),
        trace.chain_id(),
        protein_id
    );

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the domain scan workflow...");
    let result = workflows::scan::run(&trace, &config.analysis, &reporter)?;

    match &args.output {
        Some(path) => {
            let file = open_report_file(path, args.append)?;
            TextReportWriter::new(file).write_records(&result.records)?;
            println!(
                "Score report ({} cut positions) written to: {}",
                result.records.len(),
                path.display()
            );
        }
        None => {
            TextReportWriter::new(io::stdout().lock()).write_records(&result.records)?;
        }
    }

    if let Some(path) = &args.csv {
        CsvReportWriter::new(File::create(path)?).write_records(&result.records)?;
        println!("Score curve CSV written to: {}", path.display());
    }

    if let Some(path) = &args.plot {
        plot::render_score_curve(path, &result.records, protein_id)?;
        println!("Score curve plot written to: {}", path.display());
    }

    match result.best_split() {
        Some(best) => {
            println!(
                "Domain identification ({}): best split at residue {} (score {}; A:{} B:{} AB:{})",
                protein_id,
                best.residue_number,
                best.score.discriminator,
                best.score.intra_a,
                best.score.intra_b,
                best.score.inter_ab
            );
        }
        None => {
            warn!("No cut position produced a defined score.");
            println!(
                "Domain identification ({}): no defined split score for chain '{}'.",
                protein_id,
                trace.chain_id()
            );
        }
    }

    Ok(())
}
