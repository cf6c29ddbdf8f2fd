//! The errors every fallible tree operation can return.

use std::fmt;

/// A convenience alias for results carrying a [`TreeError`].
pub type Result<T, E = TreeError> = std::result::Result<T, E>;

/// One of the two child slots of a binary node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The first slot, visited with index `0`.
    Left,
    /// The second slot, visited with index `1`.
    Right,
}

impl Slot {
    /// The index that [`visit`][crate::Node::visit] uses for this slot.
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Everything that can go wrong while building or navigating a tree. All of these are raised
/// before the tree is touched, so a failed call leaves the structure exactly as it was.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// An absent value was passed where one is required, or a search tree was built from an
    /// empty sequence.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The targeted child slot already holds a node. For [`add`][crate::EditNode::add] on a
    /// full binary node this is the right slot.
    #[error("{slot} node already occupied")]
    NodeOccupied {
        /// The slot holding the node that is in the way.
        slot: Slot,
    },
    /// A child was requested by a position the node doesn't have.
    #[error("index {index} out of range for a node with {len} child slots")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// How many positions the node has.
        len: usize,
    },
}

/// Message used whenever `None` is handed to `add`, `update`, `set_left` or `set_right`.
pub(crate) const ABSENT_VALUE: &str = "value cannot be absent";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            TreeError::InvalidArgument(ABSENT_VALUE).to_string(),
            "invalid argument: value cannot be absent"
        );
        assert_eq!(
            TreeError::NodeOccupied { slot: Slot::Right }.to_string(),
            "right node already occupied"
        );
        assert_eq!(
            TreeError::IndexOutOfRange { index: 2, len: 2 }.to_string(),
            "index 2 out of range for a node with 2 child slots"
        );
    }

    #[test]
    fn slot_indices_match_visit() {
        assert_eq!(Slot::Left.index(), 0);
        assert_eq!(Slot::Right.index(), 1);
    }
}
