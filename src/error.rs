/// An error raised while building a [`Matrix`](crate::Matrix).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An element was placed in a column that the matrix doesn't have.
    #[error("column {column} is out of range for a matrix with {columns} columns")]
    OutOfRange { column: usize, columns: usize },
}

/// A specialized [`Result`](std::result::Result) type for matrix construction.
pub type Result<T, E = Error> = std::result::Result<T, E>;
