use domsplit::core::io::pdb::PdbCaReader;
use domsplit::core::io::plot;
use domsplit::core::io::report::{CsvReportWriter, TextReportWriter};
use domsplit::core::io::traits::CoordinateSource;
use domsplit::engine::config::{AnalysisConfigBuilder, ScanStrategy};
use domsplit::engine::progress::ProgressReporter;
use domsplit::workflows;
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

fn atom_line(serial: usize, chain: char, residue: isize, x: f64, y: f64, z: f64) -> String {
    format!(
        "ATOM  {:>5}  CA  ALA {}{:>4}    {:>8.3}{:>8.3}{:>8.3}  1.00  0.00           C",
        serial, chain, residue, x, y, z
    )
}

/// Two compact five-residue clusters 50 Å apart, residues 101-110 of chain A,
/// plus a decoy chain B that must be ignored.
fn two_cluster_pdb() -> String {
    let mut lines = vec![
        "HEADER    TEST PROTEIN                            01-JAN-00   9XYZ".to_string(),
    ];
    for k in 0..10 {
        let x = if k < 5 { k as f64 } else { 50.0 + k as f64 };
        lines.push(atom_line(k + 1, 'A', 101 + k as isize, x, 0.5, -0.5));
    }
    lines.push(atom_line(11, 'B', 1, 0.0, 0.0, 0.0));
    lines.push("END".to_string());
    lines.join("\n") + "\n"
}

#[test]
fn pdb_to_report_pipeline_finds_cluster_boundary() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(two_cluster_pdb().as_bytes()).unwrap();

    let (trace, metadata) = PdbCaReader::new('A').read_from_path(file.path()).unwrap();
    assert_eq!(metadata.protein_id.as_deref(), Some("9XYZ"));
    assert_eq!(trace.len(), 10);

    let config = AnalysisConfigBuilder::new().cutoff(8.0).build().unwrap();
    let result = workflows::scan::run(&trace, &config, &ProgressReporter::new()).unwrap();

    assert_eq!(result.contact_map.contact_count(), 20);
    assert_eq!(result.records.len(), 8);
    assert_eq!(result.undefined_count(), 0);

    // cuts 4 and 5 tie at 60 / 4²; the earlier one wins.
    let best = result.best_split().unwrap();
    assert_eq!(best.residue_number, 105);
    assert_eq!(best.score.cut, 4);
    assert_eq!(best.score.intra_a, 6);
    assert_eq!(best.score.intra_b, 10);
    assert_eq!(best.score.inter_ab, 4);
    assert_eq!(best.score.discriminator.value(), Some(3.75));

    let mut text = Vec::new();
    TextReportWriter::new(&mut text)
        .write_records(&result.records)
        .unwrap();
    let text = String::from_utf8(text).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[3], "A:6 B:10  AB:4105 \t 3.75");

    let mut csv = Vec::new();
    CsvReportWriter::new(&mut csv)
        .write_records(&result.records)
        .unwrap();
    let csv = String::from_utf8(csv).unwrap();
    assert_eq!(csv.lines().count(), 9);
    assert!(csv.contains("4,105,6,10,4,3.75"));

    let dir = tempdir().unwrap();
    let svg_path = dir.path().join("9xyz.svg");
    let protein_id = metadata.protein_id.as_deref().unwrap();
    plot::render_score_curve(&svg_path, &result.records, protein_id).unwrap();
    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("Domain identification (9XYZ)"));
    assert!(svg.contains(plot::Y_AXIS_LABEL));
}

#[test]
fn direct_and_incremental_pipelines_agree_on_pdb_input() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(two_cluster_pdb().as_bytes()).unwrap();
    let (trace, _) = PdbCaReader::new('A').read_from_path(file.path()).unwrap();

    let reporter = ProgressReporter::new();
    let results: Vec<_> = [ScanStrategy::Direct, ScanStrategy::Incremental]
        .into_iter()
        .map(|strategy| {
            let config = AnalysisConfigBuilder::new()
                .cutoff(8.0)
                .strategy(strategy)
                .build()
                .unwrap();
            workflows::scan::run(&trace, &config, &reporter).unwrap()
        })
        .collect();

    assert_eq!(results[0], results[1]);
}
