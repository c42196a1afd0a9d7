use crate::core::models::score::ScoreRecord;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Renders one record as a line of the text report.
///
/// Layout: `A:<intraA> B:<intraB>  AB:<interAB><residue> \t <score>`.
pub fn format_record(record: &ScoreRecord) -> String {
    let s = &record.score;
    format!(
        "A:{} B:{}  AB:{}{} \t {}",
        s.intra_a, s.intra_b, s.inter_ab, record.residue_number, s.discriminator
    )
}

/// Opens a report file, either appending to it or truncating it.
pub fn open_report_file<P: AsRef<Path>>(path: P, append: bool) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    options.open(path)
}

/// Writes score records as plain text, one line per cut position.
pub struct TextReportWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    pub fn write_records(&mut self, records: &[ScoreRecord]) -> Result<(), ReportError> {
        for record in records {
            writeln!(self.writer, "{}", format_record(record))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct CsvRow {
    cut: usize,
    residue_number: isize,
    intra_a: u64,
    intra_b: u64,
    inter_ab: u64,
    score: Option<f64>,
}

impl From<&ScoreRecord> for CsvRow {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            cut: record.score.cut,
            residue_number: record.residue_number,
            intra_a: record.score.intra_a,
            intra_b: record.score.intra_b,
            inter_ab: record.score.inter_ab,
            score: record.score.discriminator.value(),
        }
    }
}

/// Writes score records as CSV with a header row. Undefined scores are left empty.
pub struct CsvReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }

    pub fn write_records(&mut self, records: &[ScoreRecord]) -> Result<(), ReportError> {
        for record in records {
            self.writer.serialize(CsvRow::from(record))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::score::{Discriminator, SplitScore};
    use tempfile::tempdir;

    fn records() -> Vec<ScoreRecord> {
        vec![
            ScoreRecord {
                residue_number: 291,
                score: SplitScore::new(1, 0, 1, 1),
            },
            ScoreRecord {
                residue_number: 292,
                score: SplitScore::new(2, 3, 4, 2),
            },
            ScoreRecord {
                residue_number: 293,
                score: SplitScore::new(3, 5, 6, 0),
            },
        ]
    }

    #[test]
    fn format_record_matches_report_layout() {
        let lines: Vec<String> = records().iter().map(format_record).collect();
        assert_eq!(lines[0], "A:0 B:1  AB:1291 \t 0.0");
        assert_eq!(lines[1], "A:3 B:4  AB:2292 \t 3.0");
        assert_eq!(lines[2], "A:5 B:6  AB:0293 \t undefined");
    }

    #[test]
    fn text_writer_emits_one_line_per_record() {
        let mut buffer = Vec::new();
        TextReportWriter::new(&mut buffer)
            .write_records(&records())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("undefined\n"));
    }

    #[test]
    fn csv_writer_leaves_undefined_scores_empty() {
        let mut buffer = Vec::new();
        CsvReportWriter::new(&mut buffer)
            .write_records(&records())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "cut,residue_number,intra_a,intra_b,inter_ab,score");
        assert_eq!(lines[1], "1,291,0,1,1,0.0");
        assert_eq!(lines[2], "2,292,3,4,2,3.0");
        assert_eq!(lines[3], "3,293,5,6,0,");
    }

    #[test]
    fn report_file_appends_or_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");

        for _ in 0..2 {
            let file = open_report_file(&path, true).unwrap();
            TextReportWriter::new(file)
                .write_records(&records())
                .unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 6);

        let file = open_report_file(&path, false).unwrap();
        TextReportWriter::new(file)
            .write_records(&records()[..1])
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 1);
    }

    #[test]
    fn defined_discriminator_survives_csv_value() {
        let all = records();
        assert_eq!(
            CsvRow::from(&all[1]).score,
            Discriminator::Defined(3.0).value()
        );
    }
}
