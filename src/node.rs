use crate::indices::{NodeIndex, RowId};

/// The column recorded in the root header, which belongs to no column.
pub(crate) const NO_COLUMN: usize = usize::MAX;

/// A record in the toroidal data structure of a [`Matrix`]. Every element
/// of the matrix is represented by one of these nodes, and so are the root
/// and the column headers.
///
/// All links are handles into the node table of the matrix. Removing a node
/// from a ring leaves its own links untouched, so it can later be put back
/// in the same place; this is the "dancing" in dancing links.
///
/// [`Matrix`]: crate::Matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    /// The previous node in the horizontal ring. For an element this is the
    /// previous element of its row; for a header it is the previous active
    /// column in the ring of the root.
    pub(crate) left: NodeIndex,
    /// The next node in the horizontal ring. (See `self.left` for details.)
    pub(crate) right: NodeIndex,
    /// The previous node in the vertical ring of `column`.
    pub(crate) up: NodeIndex,
    /// The next node in the vertical ring of `column`.
    pub(crate) down: NodeIndex,
    /// The column this node belongs to, or [`NO_COLUMN`] for the root.
    pub(crate) column: usize,
    /// The row this node belongs to, or [`None`] for headers.
    pub(crate) row: Option<RowId>,
}

impl Node {
    /// Creates a header whose horizontal links point to its neighbours in the
    /// ring of the root, and whose vertical ring is empty.
    pub(crate) fn header(ix: NodeIndex, column: usize, left: NodeIndex, right: NodeIndex) -> Self {
        Self {
            left,
            right,
            up: ix,
            down: ix,
            column,
            row: None,
        }
    }
}

/// The bookkeeping attached to a column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    /// The number of element nodes in the vertical ring of the column.
    ///
    /// # Invariant
    ///
    /// While the column is active, walking down from its header visits
    /// exactly `size` element nodes before returning to the header.
    pub(crate) size: usize,
    /// A stable identifier for the column. It names the column in reported
    /// solutions and breaks ties when choosing a column to branch on.
    pub(crate) id: usize,
}

impl Header {
    pub(crate) fn new(id: usize) -> Self {
        Self { size: 0, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_header_has_empty_vertical_ring() {
        let ix = NodeIndex::header(2);
        let node = Node::header(ix, 2, NodeIndex::header(1), NodeIndex::header(3));
        assert_eq!(node.up, ix);
        assert_eq!(node.down, ix);
        assert_eq!(node.left, NodeIndex::header(1));
        assert_eq!(node.right, NodeIndex::header(3));
        assert_eq!(node.row, None);
        assert_eq!(Header::new(2), Header { size: 0, id: 2 });
    }
}
