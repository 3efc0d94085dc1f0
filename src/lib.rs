//! This crate provides an implementation of D. E. Knuth's Algorithm X for
//! solving the exact cover problem by means of dancing links.
//!
//! Suppose we're given a 0/1 matrix; the _exact cover_ problem is to find
//! a set of its rows that contains exactly one 1 in each column. Knuth's
//! paper "Dancing Links", [arXiv:cs/0011047][dl] [cs.DS] (2000), solves it
//! with a backtracking scheme that repeatedly _covers_ a column (removes it,
//! together with every row that intersects it, from further consideration)
//! and later _uncovers_ it in exactly the reverse order. Both operations
//! only relink nodes of circular doubly linked lists, so they take constant
//! time per node and need no auxiliary bookkeeping. [For further information,
//! see Section 7.2.2.1 of [_The Art of Computer Programming_ **4B** (2022)][taocp4b],
//! Part 2, 65–70.]
//!
//! The solver knows nothing about the meaning of rows and columns. A typical
//! caller turns its own objects into rows (for instance, every placement of
//! a puzzle piece on a board becomes a row with one column for the piece and
//! one column for each board cell it occupies), runs the search, and maps the
//! reported rows back to its objects.
//!
//! The following structures are the most important pieces of the crate:
//! - [`Matrix`] holds the sparse matrix and runs the search.
//! - [`SolutionSink`] receives each exact cover, as a [`Solution`] view, and
//!   decides whether the search goes on. Every suitable closure is a sink.
//! - [`SearchConfig`] bounds the number of solutions, selects the column
//!   choice rule and turns on [`SearchStats`].
//! - [`validate`] is an optional pass that reports malformed matrices.
//!
//! # Examples
//!
//! Knuth's toy problem asks to cover the columns $a,b,c,d,e,f,g$ with some of
//! the rows $c\\,e$; $a\\,d\\,g$; $b\\,c\\,f$; $a\\,d\\,f$; $b\\,g$; $d\\,e\\,g$.
//! Its unique solution consists of rows 3, 4 and 0:
//!
//! ```
//! use std::ops::ControlFlow;
//! use dlx_matrix::{Matrix, Solution};
//!
//! let mut matrix = Matrix::new(7);
//! matrix.add_row([      2,    4      ])?;
//! matrix.add_row([0,       3,       6])?;
//! matrix.add_row([   1, 2,       5   ])?;
//! matrix.add_row([0,       3,    5   ])?;
//! matrix.add_row([   1,             6])?;
//! matrix.add_row([         3, 4,    6])?;
//!
//! let mut rows = Vec::new();
//! let found = matrix.search_with(usize::MAX, |solution: &Solution<'_>| {
//!     rows.extend(solution.rows());
//!     ControlFlow::Continue(())
//! });
//! assert_eq!(found, 1);
//! assert_eq!(rows, [3, 4, 0]);
//! # Ok::<(), dlx_matrix::Error>(())
//! ```
//!
//! [dl]: https://arxiv.org/pdf/cs/0011047.pdf
//! [taocp4b]: https://www-cs-faculty.stanford.edu/~knuth/taocp.html#vol4

mod config;
mod error;
mod indices;
mod matrix;
mod node;
mod sink;
pub mod validate;

pub use config::{ColumnChoice, SearchConfig, SearchReport, SearchStats};
pub use error::{Error, Result};
pub use indices::{NodeIndex, RowId};
pub use matrix::Matrix;
pub use sink::{Solution, SolutionSink};
