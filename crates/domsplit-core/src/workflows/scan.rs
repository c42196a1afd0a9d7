use crate::core::models::contact_map::ContactMap;
use crate::core::models::score::{ScoreRecord, SplitScore};
use crate::core::models::trace::CaTrace;
use crate::engine::config::{AnalysisConfig, AnalysisConfigBuilder};
use crate::engine::contacts;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scoring;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub chain_id: char,
    pub contact_map: ContactMap,
    pub records: Vec<ScoreRecord>,
}

impl ScanResult {
    /// The record with the largest defined discriminator, i.e. the peak of the
    /// score curve. The earliest cut wins ties.
    pub fn best_split(&self) -> Option<&ScoreRecord> {
        let mut best: Option<(&ScoreRecord, f64)> = None;
        for record in &self.records {
            if let Some(value) = record.score.discriminator.value() {
                if best.is_none_or(|(_, best_value)| value > best_value) {
                    best = Some((record, value));
                }
            }
        }
        best.map(|(record, _)| record)
    }

    pub fn undefined_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| !r.score.discriminator.is_defined())
            .count()
    }
}

#[instrument(skip_all, name = "domain_scan_workflow", fields(chain = %trace.chain_id()))]
pub fn run(
    trace: &CaTrace,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<ScanResult, EngineError> {
    let config = AnalysisConfigBuilder::new()
        .cutoff(config.cutoff)
        .strategy(config.strategy)
        .build()?;

    reporter.report(Progress::PhaseStart {
        name: "Contact Map",
    });
    info!(
        "Building contact map for {} residues (cutoff {} Å).",
        trace.len(),
        config.cutoff
    );
    let contact_map = contacts::build_for_trace(trace, config.cutoff);
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Split Scan" });
    let cuts = scoring::cut_positions(contact_map.size());
    if cuts.is_empty() {
        warn!(
            "Chain '{}' has {} residue(s); no interior cut positions to score.",
            trace.chain_id(),
            trace.len()
        );
    }
    let scores = scoring::scan_with_progress(&contact_map, config.strategy, reporter);

    let records = label_scores(trace, &scores)?;
    reporter.report(Progress::PhaseFinish);

    let result = ScanResult {
        chain_id: trace.chain_id(),
        contact_map,
        records,
    };
    let undefined = result.undefined_count();
    if undefined > 0 {
        warn!(
            "{} cut position(s) have no inter-domain contacts; their scores are undefined.",
            undefined
        );
        reporter.message(format!("{} cut position(s) with undefined score", undefined));
    }
    info!(
        "Domain scan finished: {} cut positions scored.",
        result.records.len()
    );
    Ok(result)
}

/// Attaches the native residue number of each cut position to its score.
///
/// # Errors
///
/// Returns [`EngineError::CutOutOfRange`] if a cut lies outside the trace.
pub fn label_scores(
    trace: &CaTrace,
    scores: &[SplitScore],
) -> Result<Vec<ScoreRecord>, EngineError> {
    scores
        .iter()
        .map(|score| {
            let residue_number =
                trace
                    .residue_number(score.cut)
                    .ok_or(EngineError::CutOutOfRange {
                        cut: score.cut,
                        residues: trace.len(),
                    })?;
            Ok(ScoreRecord {
                residue_number,
                score: *score,
            })
        })
        .collect()
}
