use core::fmt;

/// The balancing discipline a [`Tree`](crate::Tree) is created with.
///
/// The mode is fixed for the lifetime of the tree. Trees of different modes
/// can coexist freely; nothing about the mode is shared between instances.
///
/// # Examples
///
/// ```
/// use wordtree::{Mode, Tree};
///
/// let plain = Tree::new(Mode::Bst);
/// let balanced = Tree::new(Mode::Rbt);
/// assert_eq!(plain.mode(), Mode::Bst);
/// assert_eq!(balanced.mode(), Mode::Rbt);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Plain binary search tree. Node colors are tracked but never consulted.
    #[default]
    Bst,
    /// Red-black tree, rebalanced on the way back up from every insertion.
    Rbt,
}

/// Node color. Only meaningful for trees in [`Mode::Rbt`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Mode {
    /// Returns `true` for [`Mode::Rbt`].
    #[must_use]
    pub const fn is_red_black(self) -> bool {
        matches!(self, Mode::Rbt)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Bst => "BST",
            Mode::Rbt => "RBT",
        })
    }
}

impl Color {
    /// The Graphviz color name used in DOT output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
