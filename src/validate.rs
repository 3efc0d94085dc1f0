//! An optional check that a [`Matrix`] states a sensible exact cover problem.
//!
//! The search itself accepts any matrix and runs mechanically on it. Callers
//! that build their matrices from untrusted or generated data can run
//! [`validate`] first to catch rows that would break the exact cover
//! semantics.

use crate::indices::RowId;
use crate::Matrix;

/// A reason why a matrix does not express a well-formed exact cover problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Defect {
    /// A row has more than one element in the same column.
    #[error("row {row} contains column {column} more than once")]
    DuplicateColumn { row: RowId, column: usize },
    /// A row has no elements, so it can never be part of a solution.
    #[error("row {row} has no elements")]
    EmptyRow { row: RowId },
    /// A column has no elements, so the matrix has no solutions.
    #[error("column {column} is not covered by any row")]
    EmptyColumn { column: usize },
}

/// Reports every defect of a matrix, rows first and then columns.
///
/// # Errors
///
/// Returns the list of defects found, in row order and then in column order,
/// if there is at least one.
///
/// # Examples
///
/// ```
/// use dlx_matrix::validate::{validate, Defect};
/// use dlx_matrix::Matrix;
///
/// let mut matrix = Matrix::new(3);
/// matrix.add_row([0, 2, 0])?;
/// assert_eq!(
///     validate(&matrix),
///     Err(vec![
///         Defect::DuplicateColumn { row: 0, column: 0 },
///         Defect::EmptyColumn { column: 1 },
///     ])
/// );
/// # Ok::<(), dlx_matrix::Error>(())
/// ```
pub fn validate(matrix: &Matrix) -> Result<(), Vec<Defect>> {
    let mut defects = Vec::new();
    for row in 0..matrix.row_count() {
        let mut columns = matrix.row_columns(row).unwrap_or_default();
        if columns.is_empty() {
            defects.push(Defect::EmptyRow { row });
            continue;
        }
        columns.sort_unstable();
        let mut reported = None;
        for pair in columns.windows(2) {
            if pair[0] == pair[1] && reported != Some(pair[0]) {
                defects.push(Defect::DuplicateColumn {
                    row,
                    column: pair[0],
                });
                reported = Some(pair[0]);
            }
        }
    }
    defects.extend(
        (0..matrix.column_count())
            .filter(|&column| matrix.column_size(column) == Some(0))
            .map(|column| Defect::EmptyColumn { column }),
    );
    if defects.is_empty() {
        Ok(())
    } else {
        Err(defects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_matrix() {
        let mut matrix = Matrix::new(4);
        for row in [[0, 1], [2, 3], [0, 2], [1, 3]] {
            matrix.add_row(row).unwrap();
        }
        assert_eq!(validate(&matrix), Ok(()));
        assert_eq!(validate(&Matrix::new(0)), Ok(()));
    }

    #[test]
    fn reports_every_defect() {
        let mut matrix = Matrix::new(4);
        matrix.add_row([1, 1, 1]).unwrap();
        matrix.begin_row();
        matrix.add_row([3, 0, 3, 0]).unwrap();
        assert_eq!(
            validate(&matrix),
            Err(vec![
                Defect::DuplicateColumn { row: 0, column: 1 },
                Defect::EmptyRow { row: 1 },
                Defect::DuplicateColumn { row: 2, column: 0 },
                Defect::DuplicateColumn { row: 2, column: 3 },
                Defect::EmptyColumn { column: 2 },
            ])
        );
    }

    #[test]
    fn defect_messages() {
        assert_eq!(
            Defect::DuplicateColumn { row: 4, column: 2 }.to_string(),
            "row 4 contains column 2 more than once"
        );
        assert_eq!(Defect::EmptyRow { row: 1 }.to_string(), "row 1 has no elements");
        assert_eq!(
            Defect::EmptyColumn { column: 0 }.to_string(),
            "column 0 is not covered by any row"
        );
    }
}
