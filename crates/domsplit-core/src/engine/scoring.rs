use super::config::ScanStrategy;
use super::progress::{Progress, ProgressReporter};
use crate::core::models::contact_map::ContactMap;
use crate::core::models::score::SplitScore;
use std::ops::Range;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Interior cut positions `1..=n-2` of a chain of `n` residues.
///
/// Empty for `n < 3`.
pub fn cut_positions(n: usize) -> Range<usize> {
    1..n.saturating_sub(1)
}

/// Contacts among the unordered pairs `(r, s)` with `start <= s < r < end`.
pub fn intradomain_contacts(map: &ContactMap, start: usize, end: usize) -> u64 {
    (start..end)
        .map(|r| (start..r).map(|s| map.value(r, s)).sum::<u64>())
        .sum()
}

/// Contacts between the index windows `rows` and `cols`, treated as independent sets.
///
/// The windows may overlap; pairs with `r == s` never contribute.
pub fn interdomain_contacts(map: &ContactMap, rows: Range<usize>, cols: Range<usize>) -> u64 {
    rows.map(|r| {
        cols.clone()
            .filter(|&s| s != r)
            .map(|s| map.value(r, s))
            .sum::<u64>()
    })
    .sum()
}

/// Scores cut `c` from scratch.
///
/// Domain A is `[0, c)`, domain B is `[c + 1, n)`, and the inter-domain windows are
/// `[0, c + 1)` against `[c, n)`, so the cut residue takes part in both windows.
pub fn score_cut(map: &ContactMap, c: usize) -> SplitScore {
    let n = map.size();
    let intra_a = intradomain_contacts(map, 0, c);
    let intra_b = intradomain_contacts(map, c + 1, n);
    let inter_ab = interdomain_contacts(map, 0..c + 1, c..n);
    SplitScore::new(c, intra_a, intra_b, inter_ab)
}

/// Scores every interior cut position of `map`, in increasing cut order.
pub fn scan(map: &ContactMap, strategy: ScanStrategy) -> Vec<SplitScore> {
    scan_with_progress(map, strategy, &ProgressReporter::new())
}

/// Same as [`scan`], reporting one task step per scored cut position.
#[instrument(skip_all, name = "split_scan", fields(residues = map.size(), strategy = %strategy))]
pub fn scan_with_progress(
    map: &ContactMap,
    strategy: ScanStrategy,
    reporter: &ProgressReporter,
) -> Vec<SplitScore> {
    reporter.report(Progress::TaskStart {
        total_steps: cut_positions(map.size()).len() as u64,
    });
    let scores = match strategy {
        ScanStrategy::Direct => scan_direct(map, reporter),
        ScanStrategy::Incremental => scan_incremental(map, reporter),
    };
    reporter.report(Progress::TaskFinish);
    debug!("Scored {} cut positions.", scores.len());
    scores
}

fn scan_direct(map: &ContactMap, reporter: &ProgressReporter) -> Vec<SplitScore> {
    #[cfg(not(feature = "parallel"))]
    let iterator = cut_positions(map.size());

    #[cfg(feature = "parallel")]
    let iterator = cut_positions(map.size()).into_par_iter();

    iterator
        .map(|c| {
            let score = score_cut(map, c);
            reporter.report(Progress::TaskIncrement { amount: 1 });
            score
        })
        .collect()
}

// Every pair counted by the inter-domain windows of cut `c` is a contact `r < s`
// with `r <= c <= s`, which is exactly the set left over once the contacts inside
// `[0, c)` and inside `(c, n)` are removed from the total.
fn scan_incremental(map: &ContactMap, reporter: &ProgressReporter) -> Vec<SplitScore> {
    let n = map.size();
    let cuts = cut_positions(n);
    if cuts.is_empty() {
        return Vec::new();
    }

    let lower: Vec<u64> = (0..n)
        .map(|r| (0..r).map(|s| map.value(r, s)).sum())
        .collect();
    let upper: Vec<u64> = (0..n)
        .map(|r| (r + 1..n).map(|s| map.value(r, s)).sum())
        .collect();
    let total: u64 = lower.iter().sum();

    // suffix[c] = contacts among [c, n)
    let mut suffix = vec![0u64; n + 1];
    for r in (0..n).rev() {
        suffix[r] = suffix[r + 1] + upper[r];
    }

    let mut intra_a = 0u64;
    let mut scores = Vec::with_capacity(cuts.len());
    for r in 0..cuts.end {
        if r >= cuts.start {
            let intra_b = suffix[r + 1];
            let inter_ab = total - intra_a - intra_b;
            scores.push(SplitScore::new(r, intra_a, intra_b, inter_ab));
            reporter.report(Progress::TaskIncrement { amount: 1 });
        }
        intra_a += lower[r];
    }
    scores
}
