use crate::core::io::traits::CoordinateSource;
use crate::core::models::ModelError;
use crate::core::models::trace::CaTrace;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbMetadata {
    /// Four-character ID code from the `HEADER` record, if present.
    pub protein_id: Option<String>,
    /// Number of `ATOM` records read, before chain and atom filtering.
    pub atom_records: usize,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("No '{atom_name}' atoms found in chain '{chain_id}'")]
    NoMatchingAtoms { chain_id: char, atom_name: String },
    #[error("Inconsistent trace: {0}")]
    Trace(#[from] ModelError),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Line is too short for an ATOM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_coordinate(line: &str, line_num: usize, start: usize) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, start + 8);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, start + 8),
            value: value.into(),
        },
    })
}

/// Reads the CA trace of one chain from a PDB file.
///
/// Only `ATOM` records are considered. The first model is read; alternate locations
/// other than blank or `A` are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct PdbCaReader {
    chain_id: char,
    atom_name: String,
}

impl PdbCaReader {
    pub fn new(chain_id: char) -> Self {
        Self {
            chain_id,
            atom_name: "CA".to_string(),
        }
    }

    pub fn with_atom_name(mut self, atom_name: impl Into<String>) -> Self {
        self.atom_name = atom_name.into().replace(' ', "");
        self
    }

    pub fn chain_id(&self) -> char {
        self.chain_id
    }

    pub fn atom_name(&self) -> &str {
        &self.atom_name
    }
}

impl CoordinateSource for PdbCaReader {
    type Metadata = PdbMetadata;
    type Error = PdbError;

    fn read_from(
        &self,
        reader: &mut impl BufRead,
    ) -> Result<(CaTrace, Self::Metadata), Self::Error> {
        let mut metadata = PdbMetadata::default();
        let mut coordinates = Vec::new();
        let mut residue_numbers = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if line.starts_with("HEADER") {
                let id = slice_and_trim(&line, 62, 66);
                if !id.is_empty() {
                    metadata.protein_id = Some(id.to_string());
                }
                continue;
            }
            if line.starts_with("ENDMDL") {
                break;
            }
            if !line.starts_with("ATOM") {
                continue;
            }

            metadata.atom_records += 1;
            if line.len() < 54 {
                return Err(PdbError::Parse {
                    line: line_num,
                    kind: PdbParseErrorKind::LineTooShort,
                });
            }

            let atom_name: String = line
                .get(12..15)
                .unwrap_or("")
                .chars()
                .filter(|c| *c != ' ')
                .collect();
            let alt_loc = line.get(16..17).and_then(|s| s.chars().next()).unwrap_or(' ');
            let chain_id = line.get(21..22).and_then(|s| s.chars().next()).unwrap_or(' ');
            if atom_name != self.atom_name
                || chain_id != self.chain_id
                || !matches!(alt_loc, ' ' | 'A')
            {
                continue;
            }

            let res_num_str = slice_and_trim(&line, 22, 26);
            let res_num: isize = res_num_str.parse().map_err(|_| PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::InvalidInt {
                    columns: "23-26".into(),
                    value: res_num_str.into(),
                },
            })?;
            let x = parse_coordinate(&line, line_num, 30)?;
            let y = parse_coordinate(&line, line_num, 38)?;
            let z = parse_coordinate(&line, line_num, 46)?;

            coordinates.push(Point3::new(x, y, z));
            residue_numbers.push(res_num);
        }

        if coordinates.is_empty() {
            return Err(PdbError::NoMatchingAtoms {
                chain_id: self.chain_id,
                atom_name: self.atom_name.clone(),
            });
        }
        debug!(
            "Read {} '{}' atoms from chain '{}' ({} ATOM records).",
            coordinates.len(),
            self.atom_name,
            self.chain_id,
            metadata.atom_records
        );

        let trace = CaTrace::new(self.chain_id, coordinates, residue_numbers)?;
        Ok((trace, metadata))
    }
}
