use crate::config::{ColumnChoice, SearchConfig, SearchReport, SearchStats};
use crate::error::{Error, Result};
use crate::indices::{NodeIndex, RowId, ROOT};
use crate::node::{Header, Node, NO_COLUMN};
use crate::sink::{Solution, SolutionSink};
use log::{debug, trace};
use std::iter;
use std::ops::ControlFlow;

/// Bumps a search counter if statistics were requested.
macro_rules! stat {
    ($search:expr, $field:ident += $n:expr) => {
        if let Some(stats) = $search.stats.as_mut() {
            stats.$field += $n;
        }
    };
}

/// A sparse 0/1 matrix prepared for the exact cover search of Knuth's
/// Algorithm X, by means of dancing links.
///
/// The matrix is built one row at a time: [`begin_row`] opens a row and
/// [`add_element`] puts a 1 in a given column of the open row. After that,
/// [`search`] and its variants visit every selection of rows that contains
/// exactly one 1 in each column.
///
/// All nodes live in a single table and refer to each other by [`NodeIndex`]
/// handles. The table holds the root header at position 0, then one header per
/// column in column order, then the element nodes in the order they were
/// added. Nothing is ever deleted during a search: covering a column only
/// unlinks nodes from their rings, and uncovering puts them back.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use dlx_matrix::{Matrix, Solution};
///
/// // Columns 0..4 stand for the constraints A, B, C and D.
/// let mut matrix = Matrix::new(4);
/// for row in [[0, 1], [2, 3], [0, 2], [1, 3], [0, 3], [1, 2]] {
///     matrix.add_row(row)?;
/// }
///
/// let mut covers = Vec::new();
/// let found = matrix.search_with(10, |solution: &Solution<'_>| {
///     covers.push(solution.sorted_rows());
///     ControlFlow::Continue(())
/// });
/// assert_eq!(found, 3);
/// covers.sort();
/// assert_eq!(covers, [[0, 1], [2, 3], [4, 5]]);
/// # Ok::<(), dlx_matrix::Error>(())
/// ```
///
/// [`begin_row`]: Self::begin_row
/// [`add_element`]: Self::add_element
/// [`search`]: Self::search
#[derive(Debug, Clone)]
pub struct Matrix {
    /// The root, the column headers and the element nodes.
    nodes: Vec<Node>,
    /// The size and id of each column, indexed by column.
    headers: Vec<Header>,
    /// The first element of each row, or [`None`] if the row is still empty.
    rows: Vec<Option<NodeIndex>>,
    /// The element chosen at each level of the current search.
    chosen: Vec<NodeIndex>,
}

/// The state of one call to [`Matrix::search_with_config`] that doesn't
/// belong to the matrix itself.
struct Search<'s, S> {
    sink: &'s mut S,
    max_solutions: usize,
    found: usize,
    column_choice: ColumnChoice,
    stats: Option<SearchStats>,
}

impl Matrix {
    // Matrix setup routines.

    /// Creates a matrix with the given number of columns and no rows.
    ///
    /// The column headers are linked into the ring of the root in index
    /// order, and every column starts out empty.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        let last = NodeIndex::new(columns);
        let first = if columns == 0 {
            ROOT
        } else {
            NodeIndex::header(0)
        };
        let headers = (0..columns).map(|column| {
            let ix = NodeIndex::header(column);
            let right = if column + 1 == columns {
                ROOT
            } else {
                NodeIndex::header(column + 1)
            };
            Node::header(ix, column, NodeIndex::new(column), right)
        });
        let nodes = iter::once(Node::header(ROOT, NO_COLUMN, last, first))
            .chain(headers)
            .collect();
        Self {
            nodes,
            headers: (0..columns).map(Header::new).collect(),
            rows: Vec::new(),
            chosen: Vec::new(),
        }
    }

    /// Opens a new, empty row and returns its number. Subsequent calls to
    /// [`add_element`](Self::add_element) place their elements in this row.
    pub fn begin_row(&mut self) -> RowId {
        self.rows.push(None);
        self.rows.len() - 1
    }

    /// Puts a 1 in the given column of the open row, and returns the handle
    /// of the new element node. A row is opened first if there is none yet.
    ///
    /// The element is appended to the right end of its row and to the bottom
    /// of its column. Adding the same column twice to one row is not checked
    /// here; see [`validate`](crate::validate::validate).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `column` is not less than the number
    /// of columns. The matrix is left untouched in that case.
    pub fn add_element(&mut self, column: usize) -> Result<NodeIndex> {
        self.check_column(column)?;
        if self.rows.is_empty() {
            self.begin_row();
        }
        let row = self.rows.len() - 1;
        let ix = NodeIndex::new(self.nodes.len());
        let head = NodeIndex::header(column);
        let (left, right) = match self.rows[row] {
            Some(first) => (self.node(first).left, first),
            None => {
                // The new node is the only member of its row ring.
                self.rows[row] = Some(ix);
                (ix, ix)
            }
        };
        let up = self.node(head).up;
        self.nodes.push(Node {
            left,
            right,
            up,
            down: head,
            column,
            row: Some(row),
        });
        self.node_mut(left).right = ix;
        self.node_mut(right).left = ix;
        self.node_mut(up).down = ix;
        self.node_mut(head).up = ix;
        self.headers[column].size += 1;
        Ok(ix)
    }

    /// Opens a new row containing the given columns, in order, and returns
    /// its number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if any of the columns is out of range.
    /// All columns are checked before the row is opened, so nothing is added
    /// to the matrix in that case.
    pub fn add_row<C>(&mut self, columns: C) -> Result<RowId>
    where
        C: AsRef<[usize]>,
    {
        let columns = columns.as_ref();
        for &column in columns {
            self.check_column(column)?;
        }
        let row = self.begin_row();
        for &column in columns {
            self.add_element(column)?;
        }
        Ok(row)
    }

    fn check_column(&self, column: usize) -> Result<()> {
        if column < self.headers.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                column,
                columns: self.headers.len(),
            })
        }
    }

    // Accessor methods.

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the number of rows opened so far, including empty ones.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of 1s in the matrix.
    pub fn element_count(&self) -> usize {
        self.nodes.len() - self.headers.len() - 1
    }

    /// Returns the number of active elements in a column, or [`None`] if
    /// the column doesn't exist.
    pub fn column_size(&self, column: usize) -> Option<usize> {
        self.headers.get(column).map(|header| header.size)
    }

    /// Returns the columns of a row in the order they were added, or [`None`]
    /// if the row doesn't exist.
    pub fn row_columns(&self, row: RowId) -> Option<Vec<usize>> {
        let first = self.rows.get(row)?;
        Some(first.map_or_else(Vec::new, |ix| self.row_ring(ix).collect()))
    }

    /// Returns the representative of a row, that is, its first element.
    /// Rows without elements and rows that don't exist have none.
    pub fn representative(&self, row: RowId) -> Option<NodeIndex> {
        self.rows.get(row).copied().flatten()
    }

    /// Returns the row that an element node belongs to.
    ///
    /// # Panics
    ///
    /// This function panics if `ix` does not refer to an element node.
    pub fn row_of(&self, ix: NodeIndex) -> RowId {
        self.node(ix)
            .row
            .unwrap_or_else(|| panic!("node at index {ix:?} is a header"))
    }

    /// Returns whether a column has been removed from the ring of the root.
    ///
    /// # Panics
    ///
    /// This function panics if the column is out of range.
    pub fn is_covered(&self, column: usize) -> bool {
        let head = NodeIndex::header(column);
        assert!(
            head.is_header(self.column_count()),
            "column {column} is out of range"
        );
        self.node(self.node(head).left).right != head
    }

    /// Visits the column ids of the row containing `start`, beginning with
    /// `start` itself and proceeding cyclically from left to right.
    pub(crate) fn row_ring(&self, start: NodeIndex) -> impl Iterator<Item = usize> + '_ {
        assert!(
            !start.is_header(self.column_count()),
            "node at index {start:?} is not an element"
        );
        let mut cur = Some(start);
        iter::from_fn(move || {
            let node = self.node(cur?);
            cur = Some(node.right).filter(|&right| right != start);
            Some(self.headers[node.column].id)
        })
    }

    /// Returns a reference to the node at the given position.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    fn node(&self, ix: NodeIndex) -> &Node {
        &self.nodes[ix.get()]
    }

    /// Returns a mutable reference to the node at the given position.
    ///
    /// # Panics
    ///
    /// This function panics if the index is out of bounds.
    fn node_mut(&mut self, ix: NodeIndex) -> &mut Node {
        &mut self.nodes[ix.get()]
    }

    // Algorithm X routines.

    /// Removes a column from the ring of the root, and removes every row
    /// that intersects the column from the vertical rings of its other
    /// columns. The rows of the covered column itself stay linked to it.
    pub(crate) fn cover(&mut self, column: usize) {
        trace!("cover column {column}");
        let head = NodeIndex::header(column);
        let Node { left, right, .. } = *self.node(head);
        self.node_mut(right).left = left;
        self.node_mut(left).right = right;

        // Hide all rows of the column, from top to bottom, and each row from
        // left to right.
        let mut i = self.node(head).down;
        while i != head {
            let mut j = self.node(i).right;
            while j != i {
                let Node { up, down, column: other, .. } = *self.node(j);
                self.node_mut(down).up = up;
                self.node_mut(up).down = down;
                self.headers[other].size -= 1;
                j = self.node(j).right;
            }
            i = self.node(i).down;
        }
    }

    /// Undoes the last [covering](Self::cover) of a column. The nodes are
    /// put back in exactly the reverse order in which they were removed:
    /// the rows from bottom to top, each row from right to left, and the
    /// header last.
    pub(crate) fn uncover(&mut self, column: usize) {
        trace!("uncover column {column}");
        let head = NodeIndex::header(column);
        let mut i = self.node(head).up;
        while i != head {
            let mut j = self.node(i).left;
            while j != i {
                let Node { up, down, column: other, .. } = *self.node(j);
                self.headers[other].size += 1;
                self.node_mut(down).up = j;
                self.node_mut(up).down = j;
                j = self.node(j).left;
            }
            i = self.node(i).up;
        }

        let Node { left, right, .. } = *self.node(head);
        self.node_mut(right).left = head;
        self.node_mut(left).right = head;
    }

    /// Finds the active column to branch on, or returns [`None`] if every
    /// column has been covered.
    fn choose_column(&self, choice: ColumnChoice) -> Option<usize> {
        let first = self.node(ROOT).right;
        if first == ROOT {
            return None;
        }
        match choice {
            ColumnChoice::Leftmost => Some(self.node(first).column),
            ColumnChoice::MinimumSize => {
                let mut best = self.node(first).column;
                let mut cur = first;
                while cur != ROOT {
                    let node = self.node(cur);
                    let (header, best_header) = (&self.headers[node.column], &self.headers[best]);
                    if (header.size, header.id) < (best_header.size, best_header.id) {
                        best = node.column;
                    }
                    // No column can do better than an empty one.
                    if header.size == 0 {
                        break;
                    }
                    cur = node.right;
                }
                Some(best)
            }
        }
    }

    /// Visits the exact covers of the columns that remain in the ring of the
    /// root, given that `self.chosen` holds the `k` rows selected so far.
    fn solve<S: SolutionSink>(&mut self, k: usize, search: &mut Search<'_, S>) -> ControlFlow<()> {
        stat!(search, nodes += 1);
        if let Some(stats) = search.stats.as_mut() {
            stats.max_depth = stats.max_depth.max(k);
        }
        debug_assert_eq!(self.chosen.len(), k);

        let Some(column) = self.choose_column(search.column_choice) else {
            // Every column is covered exactly once by the chosen rows.
            search.found += 1;
            trace!("solution {} found at depth {k}", search.found);
            let solution = Solution::new(self, &self.chosen, search.found);
            let flow = search.sink.accept(&solution);
            return if flow.is_break() || search.found >= search.max_solutions {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            };
        };
        if self.headers[column].size == 0 {
            trace!("column {column} has no rows left at depth {k}, backtracking");
            stat!(search, dead_ends += 1);
            return ControlFlow::Continue(());
        }
        trace!("branching on column {column} at depth {k}");

        let head = NodeIndex::header(column);
        let mut r = self.node(head).down;
        while r != head {
            self.chosen.push(r);
            self.cover(column);
            stat!(search, covers += 1);
            let mut j = self.node(r).right;
            while j != r {
                self.cover(self.node(j).column);
                stat!(search, covers += 1);
                j = self.node(j).right;
            }

            let flow = self.solve(k + 1, search);

            // Undo the covers in reverse order, even when the search stops,
            // so that the matrix is left as we found it.
            let mut j = self.node(r).left;
            while j != r {
                self.uncover(self.node(j).column);
                j = self.node(j).left;
            }
            self.uncover(column);
            self.chosen.pop();
            if flow.is_break() {
                return flow;
            }
            r = self.node(r).down;
        }
        ControlFlow::Continue(())
    }

    // Search entry points.

    /// Counts the exact covers of the matrix, stopping after `max_solutions`
    /// of them.
    pub fn search(&mut self, max_solutions: usize) -> usize {
        self.search_with(max_solutions, |_: &Solution<'_>| ControlFlow::Continue(()))
    }

    /// Reports the exact covers of the matrix to `sink`, stopping after
    /// `max_solutions` of them or as soon as the sink returns
    /// [`ControlFlow::Break`]. Returns the number of solutions reported.
    pub fn search_with<S: SolutionSink>(&mut self, max_solutions: usize, mut sink: S) -> usize {
        let config = SearchConfig::new().with_max_solutions(max_solutions);
        self.search_with_config(&config, &mut sink).solutions
    }

    /// Reports the exact covers of the matrix to `sink` as directed by
    /// `config`.
    ///
    /// Solutions are reported in a deterministic order that depends only on
    /// the matrix and on [`SearchConfig::column_choice`]. When the search
    /// stops early the matrix is restored anyway, so it can be searched
    /// again.
    pub fn search_with_config<S: SolutionSink>(
        &mut self,
        config: &SearchConfig,
        sink: &mut S,
    ) -> SearchReport {
        let mut search = Search {
            sink,
            max_solutions: config.max_solutions,
            found: 0,
            column_choice: config.column_choice,
            stats: config.collect_stats.then(SearchStats::default),
        };
        debug!(
            "searching {} columns, {} rows and {} elements for at most {} solutions",
            self.column_count(),
            self.row_count(),
            self.element_count(),
            config.max_solutions
        );
        if config.max_solutions > 0 {
            self.chosen.clear();
            let _ = self.solve(0, &mut search);
        }
        debug_assert!(self.chosen.is_empty());
        debug!("search finished with {} solutions", search.found);
        if let Some(stats) = &search.stats {
            debug!("{stats:?}");
        }
        SearchReport {
            solutions: search.found,
            stats: search.stats,
        }
    }
}
