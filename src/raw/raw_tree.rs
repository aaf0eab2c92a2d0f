use core::cmp::Ordering;
use core::convert::Infallible;

use smallvec::SmallVec;
use tracing::trace;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::mode::{Color, Mode};

/// Double-red patterns in the order they are checked: (child side, grandchild side).
const PATTERNS: [(Side, Side); 4] = [
    (Side::Left, Side::Left),
    (Side::Left, Side::Right),
    (Side::Right, Side::Left),
    (Side::Right, Side::Right),
];

/// Ancestors visited on the way down, each with the side that was taken.
type Path = SmallVec<[(Handle, Side); 32]>;

/// Pending nodes for the explicit-stack walks.
type Stack<T> = SmallVec<[T; 32]>;

/// The tree engine behind [`Tree`](crate::Tree).
///
/// Nodes live in an arena and refer to their children by handle. Insertion walks
/// down recording a [`Path`], then unwinds it bottom-up, relinking each ancestor to
/// the (possibly rotated) subtree below it and, in red-black mode, rebalancing that
/// ancestor before moving on.
#[derive(Clone, Debug)]
pub(crate) struct RawTree {
    /// Arena storing every node ever inserted.
    nodes: Arena<Node>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Balancing discipline, fixed at construction.
    mode: Mode,
}

impl RawTree {
    pub(crate) const fn new(mode: Mode) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            mode,
        }
    }

    pub(crate) fn with_capacity(mode: Mode, capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            mode,
        }
    }

    pub(crate) const fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of distinct keys.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node {
        self.nodes.get(handle)
    }

    /// Releases every node at once. The mode is kept.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Finds the node holding `key`.
    pub(crate) fn search(&self, key: &str) -> Option<Handle> {
        let mut cursor = self.root;
        while let Some(handle) = cursor {
            let node = self.nodes.get(handle);
            cursor = match key.cmp(node.key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Inserts one occurrence of `key` and returns its frequency afterwards.
    pub(crate) fn insert(&mut self, key: &str) -> u32 {
        let mut path = Path::new();
        let mut cursor = self.root;
        let mut frequency = 1;

        let bottom = loop {
            let Some(handle) = cursor else {
                break self.nodes.alloc(Node::new(key));
            };
            let node = self.nodes.get_mut(handle);
            let side = match key.cmp(node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    frequency = node.bump();
                    break handle;
                }
            };
            path.push((handle, side));
            cursor = node.child(side);
        };

        // Unwind: every ancestor takes back whatever now roots the subtree below it.
        let mut subtree = self.rebalance(bottom);
        while let Some((parent, side)) = path.pop() {
            self.nodes.get_mut(parent).set_child(side, Some(subtree));
            subtree = self.rebalance(parent);
        }
        self.root = Some(subtree);

        frequency
    }

    /// Forces the root black, then gives the root one more rebalance pass.
    pub(crate) fn set_black_root(&mut self) {
        let Some(root) = self.root else {
            return;
        };
        self.nodes.get_mut(root).set_color(Color::Black);
        self.root = Some(self.rebalance(root));
        trace!(mode = %self.mode, "root recolored black");
    }

    /// −1 for an empty tree, otherwise the number of edges on the longest root-to-leaf path.
    pub(crate) fn depth(&self) -> isize {
        let mut deepest = -1;
        let mut stack: Stack<(Handle, isize)> = self.root.map(|root| (root, 0)).into_iter().collect();
        while let Some((handle, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = self.nodes.get(handle);
            stack.extend([node.left(), node.right()].into_iter().flatten().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Visits nodes root first, then the left subtree, then the right subtree.
    pub(crate) fn preorder<F>(&self, mut visit: F)
    where
        F: FnMut(&Node),
    {
        let _ = self.try_preorder(|node| {
            visit(node);
            Ok::<(), Infallible>(())
        });
    }

    /// Pre-order walk that stops at the first error returned by `visit`.
    pub(crate) fn try_preorder<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&Node) -> Result<(), E>,
    {
        let mut stack: Stack<Handle> = self.root.into_iter().collect();
        while let Some(handle) = stack.pop() {
            let node = self.nodes.get(handle);
            visit(node)?;
            // Right goes on first so the left subtree is finished before it.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        Ok(())
    }

    /// In-order (sorted key) iterator.
    pub(crate) fn inorder(&self) -> Inorder<'_> {
        let mut iter = Inorder {
            tree: self,
            stack: Stack::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    #[inline]
    fn is_red(&self, handle: Option<Handle>) -> bool {
        handle.is_some_and(|h| self.nodes.get(h).color() == Color::Red)
    }

    /// Finds the first double-red pattern below `top`, returning the pattern and the red child.
    fn double_red(&self, top: Handle) -> Option<(Side, Side, Handle)> {
        let node = self.nodes.get(top);
        PATTERNS.into_iter().find_map(|(outer, inner)| {
            let child = node.child(outer)?;
            (self.is_red(Some(child)) && self.is_red(self.nodes.get(child).child(inner))).then_some((outer, inner, child))
        })
    }

    /// Red-black fix-up for a single node. Returns the node now rooting this subtree.
    ///
    /// At most one double-red pattern is resolved per call. A red sibling means a color
    /// flip; otherwise one rotation (same-side pattern) or two (cross pattern), after
    /// which the new subtree root is black and the demoted former root is red.
    fn rebalance(&mut self, top: Handle) -> Handle {
        if !self.mode.is_red_black() {
            return top;
        }
        let Some((outer, inner, child)) = self.double_red(top) else {
            return top;
        };

        if self.is_red(self.nodes.get(top).child(outer.opposite())) {
            self.flip_colors(top);
            return top;
        }

        if inner != outer {
            let promoted = self.rotate(child, inner);
            self.nodes.get_mut(top).set_child(outer, Some(promoted));
        }
        let new_top = self.rotate(top, outer);
        self.nodes.get_mut(new_top).set_color(Color::Black);
        self.nodes.get_mut(top).set_color(Color::Red);
        new_top
    }

    /// Recolors `top` red and both of its children black.
    fn flip_colors(&mut self, top: Handle) {
        let node = self.nodes.get_mut(top);
        node.set_color(Color::Red);
        let children = [node.left(), node.right()];
        trace!(key = node.key(), "color flip");
        for child in children.into_iter().flatten() {
            self.nodes.get_mut(child).set_color(Color::Black);
        }
    }

    /// Promotes the child of `top` on `side` into `top`'s place and returns it.
    ///
    /// The promoted node's inner subtree moves across to `top`, and `top` becomes
    /// the promoted node's child on the opposite side. Keys and frequencies are untouched.
    fn rotate(&mut self, top: Handle, side: Side) -> Handle {
        let pivot = self.nodes.get(top).child(side).expect("`RawTree::rotate()` - no child to promote!");
        let inner = self.nodes.get(pivot).child(side.opposite());
        self.nodes.get_mut(top).set_child(side, inner);
        self.nodes.get_mut(pivot).set_child(side.opposite(), Some(top));
        trace!(from = self.nodes.get(top).key(), to = self.nodes.get(pivot).key(), ?side, "rotate");
        pivot
    }
}

/// Sorted-order walk driven by an explicit stack of pending ancestors.
#[derive(Clone, Debug)]
pub(crate) struct Inorder<'a> {
    tree: &'a RawTree,
    stack: Stack<Handle>,
    remaining: usize,
}

impl Inorder<'_> {
    fn push_left_spine(&mut self, mut cursor: Option<Handle>) {
        while let Some(handle) = cursor {
            self.stack.push(handle);
            cursor = self.tree.nodes.get(handle).left();
        }
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.nodes.get(handle);
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Inorder<'_> {}
