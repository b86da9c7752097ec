//! Projection of match records onto fixed-order feature vectors.

use crate::data::MatchRecord;
use crate::linear::Matrix;

/// Numeric projection of a set of records over an ordered list of feature columns. Absent or
/// non-finite quotes are flagged in `missing`; their slot in `values` holds zero and must not
/// be read.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub values: Matrix<f64>,
    pub missing: Matrix<bool>,
}
impl Projection {
    pub fn project<'a>(
        columns: &[String],
        records: impl ExactSizeIterator<Item = &'a MatchRecord>,
    ) -> Self {
        let mut values = Matrix::allocate(records.len(), columns.len());
        let mut missing = Matrix::allocate(records.len(), columns.len());
        for (row, record) in records.enumerate() {
            for (col, column) in columns.iter().enumerate() {
                match record.quote(column) {
                    Some(price) => values[(row, col)] = price,
                    None => missing[(row, col)] = true,
                }
            }
        }
        Self { values, missing }
    }

    pub fn rows(&self) -> usize {
        self.values.rows()
    }

    pub fn row(&self, row: usize) -> FeatureVector {
        FeatureVector {
            values: self.values.row_slice(row),
            missing: self.missing.row_slice(row),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector<'a> {
    pub values: &'a [f64],
    pub missing: &'a [bool],
}
impl<'a> FeatureVector<'a> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
