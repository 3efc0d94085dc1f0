/// The position of a node in the sequential table of a [`Matrix`].
///
/// The table starts with the root header, followed by one header per column
/// and then by the element nodes in the order they were added. A handle to
/// an element node is how a [`Solution`] names the rows it selected: each row
/// is represented by the first element that was added to it.
///
/// [`Matrix`]: crate::Matrix
/// [`Solution`]: crate::Solution
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone)]
#[repr(transparent)]
pub struct NodeIndex(usize);

/// The position of the root header in the node table of a [`Matrix`]; Knuth
/// called this node the _root_ in the paper "Dancing links", [arXiv:cs/0011047][dl]
/// [cs.DS] (2000).
///
/// [`Matrix`]: crate::Matrix
/// [dl]: https://arxiv.org/pdf/cs/0011047.pdf
pub(crate) const ROOT: NodeIndex = NodeIndex::new(0);

impl NodeIndex {
    /// Creates a new index.
    #[must_use]
    pub(crate) const fn new(ix: usize) -> Self {
        Self(ix)
    }

    /// Returns the position of the header node of the given column.
    #[must_use]
    pub(crate) const fn header(column: usize) -> Self {
        Self(column + 1)
    }

    /// Returns the index value as a primitive type.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Returns whether this index refers to the root or to a column header,
    /// given the number of columns in the matrix.
    #[must_use]
    pub(crate) const fn is_header(self, columns: usize) -> bool {
        self.0 <= columns
    }
}

/// The position of a row in a [`Matrix`], counting from zero in the order
/// the rows were opened.
///
/// [`Matrix`]: crate::Matrix
pub type RowId = usize;
