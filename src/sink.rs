use crate::indices::{NodeIndex, RowId};
use crate::Matrix;
use std::ops::ControlFlow;

/// An exact cover found by [`Matrix::search_with`], handed to a
/// [`SolutionSink`] while the search is suspended at the deepest level.
///
/// The chosen rows are named by their representatives, that is, by the first
/// element added to each of them. The view also translates representatives
/// back to row numbers and column ids, which is usually what the caller
/// wants to map onto its own domain objects.
pub struct Solution<'m> {
    /// The matrix being searched.
    matrix: &'m Matrix,
    /// The element chosen at each level of the search, from the top.
    chosen: &'m [NodeIndex],
    /// The 1-based number of this solution.
    count: usize,
}

impl<'m> Solution<'m> {
    pub(crate) fn new(matrix: &'m Matrix, chosen: &'m [NodeIndex], count: usize) -> Self {
        Self {
            matrix,
            chosen,
            count,
        }
    }

    /// Returns the representatives of the chosen rows, in the order the
    /// search selected them.
    pub fn representatives(&self) -> &'m [NodeIndex] {
        self.chosen
    }

    /// Returns how many solutions have been found so far, this one included.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the number of rows in the solution.
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// Returns `true` if the solution selects no rows, which happens only
    /// for a matrix without columns.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Returns the row numbers of the chosen rows, in the order the search
    /// selected them.
    pub fn rows(&self) -> impl Iterator<Item = RowId> + 'm {
        let (matrix, chosen) = (self.matrix, self.chosen);
        chosen.iter().map(move |&ix| matrix.row_of(ix))
    }

    /// Collects the row numbers of the solution in ascending order.
    pub fn sorted_rows(&self) -> Vec<RowId> {
        let mut rows: Vec<_> = self.rows().collect();
        rows.sort_unstable();
        rows
    }

    /// Returns the column ids of the row containing `element`, starting with
    /// the column of `element` itself and proceeding cyclically from left
    /// to right.
    ///
    /// # Panics
    ///
    /// This function panics if `element` is not an element node of the
    /// matrix.
    pub fn columns(&self, element: NodeIndex) -> impl Iterator<Item = usize> + 'm {
        let matrix = self.matrix;
        matrix.row_ring(element)
    }
}

/// A receiver for the solutions of an exact cover search.
///
/// Any closure `FnMut(&Solution) -> ControlFlow<()>` is a sink; this covers
/// both free functions and closures that capture caller state. Returning
/// [`ControlFlow::Break`] stops the search as if the solution bound had been
/// reached.
pub trait SolutionSink {
    /// Receives one exact cover.
    fn accept(&mut self, solution: &Solution<'_>) -> ControlFlow<()>;
}

impl<F> SolutionSink for F
where
    F: FnMut(&Solution<'_>) -> ControlFlow<()>,
{
    fn accept(&mut self, solution: &Solution<'_>) -> ControlFlow<()> {
        self(solution)
    }
}
