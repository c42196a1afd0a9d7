use super::ModelError;

/// An immutable, symmetric residue-residue contact matrix.
///
/// Stored row-major as an `n × n` boolean grid. The diagonal carries whatever value
/// the map was constructed with; consumers must not read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMap {
    size: usize,
    cells: Vec<bool>,
}

impl ContactMap {
    /// Assembles a map from the strict lower triangle.
    ///
    /// `lower[i]` holds the entries `(i, j)` for `j < i`. Each entry is written to
    /// `(i, j)` and then copied to `(j, i)`; the diagonal is left unset.
    pub(crate) fn from_lower_triangle(lower: Vec<Vec<bool>>) -> Self {
        let size = lower.len();
        let mut cells = vec![false; size * size];
        for (i, row) in lower.into_iter().enumerate() {
            debug_assert_eq!(row.len(), i);
            for (j, in_contact) in row.into_iter().enumerate() {
                cells[i * size + j] = in_contact;
                cells[j * size + i] = cells[i * size + j];
            }
        }
        Self { size, cells }
    }

    /// Creates a map from explicit rows.
    ///
    /// The diagonal is accepted as given. Off-diagonal entries must be symmetric.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotSquare`] if any row length differs from the row count,
    /// or [`ModelError::NotSymmetric`] for the first asymmetric pair found.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, ModelError> {
        let size = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(ModelError::NotSquare {
                rows: size,
                row,
                len: r.len(),
            });
        }
        for i in 1..size {
            for j in 0..i {
                if rows[i][j] != rows[j][i] {
                    return Err(ModelError::NotSymmetric { row: i, col: j });
                }
            }
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of residues covered by the map.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the stored entry for `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn is_contact(&self, i: usize, j: usize) -> bool {
        assert!(i < self.size && j < self.size, "contact index out of bounds");
        self.cells[i * self.size + j]
    }

    /// Contact count as an integer cell value (0 or 1).
    #[inline]
    pub(crate) fn value(&self, i: usize, j: usize) -> u64 {
        u64::from(self.cells[i * self.size + j])
    }

    /// Full row `i`, including the diagonal cell.
    pub fn row(&self, i: usize) -> &[bool] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    /// Number of unordered residue pairs in contact, diagonal excluded.
    pub fn contact_count(&self) -> u64 {
        (1..self.size)
            .map(|i| (0..i).map(|j| self.value(i, j)).sum::<u64>())
            .sum()
    }
}
