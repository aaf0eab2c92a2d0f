use thiserror::Error;

use super::Tree;
use crate::mode::Color;
use crate::raw::{Handle, RawTree};

/// A structural property that a [`Tree`] failed to satisfy.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Violation {
    #[error("keys out of order: {previous:?} is not less than {next:?}")]
    OutOfOrder { previous: String, next: String },

    #[error("root {key:?} is red")]
    RedRoot { key: String },

    #[error("red node {parent:?} has red child {child:?}")]
    DoubleRed { parent: String, child: String },

    #[error("black height differs under {key:?}: {left} on the left, {right} on the right")]
    BlackHeight { key: String, left: usize, right: usize },
}

impl Tree {
    /// Verifies the ordering property and, in red-black mode, the red-black properties.
    ///
    /// Red-black checks cover a black root, no red node with a red child, and equal
    /// black counts on every path down to an empty link. The root is only made black
    /// by [`Tree::set_black_root`], so call that first.
    ///
    /// # Errors
    ///
    /// Returns the first [`Violation`] found.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::{Mode, Tree, Violation};
    ///
    /// let mut tree = Tree::new(Mode::Rbt);
    /// tree.insert("solo");
    /// assert_eq!(tree.check_invariants(), Err(Violation::RedRoot { key: "solo".into() }));
    ///
    /// tree.set_black_root();
    /// assert_eq!(tree.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), Violation> {
        let keys: Vec<&str> = self.iter().map(|(key, _)| key).collect();
        if let Some(pair) = keys.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(Violation::OutOfOrder {
                previous: pair[0].into(),
                next: pair[1].into(),
            });
        }

        if !self.mode().is_red_black() {
            return Ok(());
        }
        let Some(root) = self.raw.root() else {
            return Ok(());
        };
        let node = self.raw.node(root);
        if node.color() == Color::Red {
            return Err(Violation::RedRoot { key: node.key().into() });
        }
        black_height(&self.raw, Some(root)).map(|_| ())
    }
}

/// Black nodes on every path from `handle` down to an empty link, counting the empty link.
///
/// Recursion is bounded by the height of a red-black tree, which is logarithmic.
fn black_height(raw: &RawTree, handle: Option<Handle>) -> Result<usize, Violation> {
    let Some(handle) = handle else {
        return Ok(1);
    };
    let node = raw.node(handle);

    if node.color() == Color::Red {
        for child in [node.left(), node.right()].into_iter().flatten() {
            let child = raw.node(child);
            if child.color() == Color::Red {
                return Err(Violation::DoubleRed {
                    parent: node.key().into(),
                    child: child.key().into(),
                });
            }
        }
    }

    let left = black_height(raw, node.left())?;
    let right = black_height(raw, node.right())?;
    if left != right {
        return Err(Violation::BlackHeight {
            key: node.key().into(),
            left,
            right,
        });
    }
    Ok(left + usize::from(node.color() == Color::Black))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::mode::Mode;
    use proptest::prelude::*;

    #[test]
    fn empty_trees_pass() {
        assert_eq!(Tree::new(Mode::Bst).check_invariants(), Ok(()));
        assert_eq!(Tree::new(Mode::Rbt).check_invariants(), Ok(()));
    }

    #[test]
    fn plain_mode_ignores_colors() {
        let mut tree = Tree::new(Mode::Bst);
        tree.extend(["a", "b", "c"]);
        assert_eq!(tree.root_color(), Some(Color::Red));
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn red_root_with_red_child_is_reported_before_fixup() {
        let mut tree = Tree::new(Mode::Rbt);
        tree.extend(["a", "b"]);
        assert_eq!(tree.check_invariants(), Err(Violation::RedRoot { key: "a".into() }));
        tree.set_black_root();
        assert_eq!(tree.check_invariants(), Ok(()));
    }

    #[test]
    fn violation_messages() {
        let violation = Violation::DoubleRed {
            parent: "p".into(),
            child: "c".into(),
        };
        assert_eq!(violation.to_string(), "red node \"p\" has red child \"c\"");
        let violation = Violation::BlackHeight {
            key: "k".into(),
            left: 2,
            right: 3,
        };
        assert_eq!(
            violation.to_string(),
            "black height differs under \"k\": 2 on the left, 3 on the right"
        );
    }

    proptest! {
        #[test]
        fn red_black_trees_check_clean(keys in prop::collection::vec("[a-h]{1,3}", 1..400)) {
            let mut tree = Tree::new(Mode::Rbt);
            tree.extend(&keys);
            tree.set_black_root();
            prop_assert_eq!(tree.check_invariants(), Ok(()));
        }
    }
}
