use core::fmt;
use core::iter::FusedIterator;

use tracing::debug;

use crate::mode::{Color, Mode};
use crate::raw::{Inorder, RawTree};

mod dot;
mod invariants;

pub use invariants::Violation;

/// Longest key, in bytes, that a [`Tree`] accepts.
pub const MAX_KEY_LEN: usize = 254;

/// An ordered, duplicate-counting index of string keys.
///
/// Every distinct key is stored once together with the number of times it has been
/// inserted. Keys are ordered by their bytes. The tree is either a plain binary search
/// tree ([`Mode::Bst`]) or a red-black tree ([`Mode::Rbt`]); the mode is chosen at
/// construction and never changes.
///
/// In red-black mode every insertion is followed by a bottom-up fix-up on each
/// ancestor of the inserted key, so the height stays within `2·log2(n + 1)`. The
/// root is *not* kept black continuously: call [`Tree::set_black_root`] once after
/// bulk loading, before relying on the red-black properties (see
/// [`Tree::check_invariants`]).
///
/// Keys are removed only all at once, by [`Tree::clear`] or by dropping the tree.
///
/// # Examples
///
/// ```
/// use wordtree::{Mode, Tree};
///
/// let mut words = Tree::new(Mode::Rbt);
/// for word in ["b", "a", "c", "a"] {
///     words.insert(word);
/// }
/// words.set_black_root();
///
/// assert_eq!(words.frequency("a"), Some(2));
/// assert!(words.contains("c"));
/// assert!(!words.contains("d"));
/// assert_eq!(words.depth(), 1);
///
/// let sorted: Vec<_> = words.iter().collect();
/// assert_eq!(sorted, [("a", 2), ("b", 1), ("c", 1)]);
/// ```
#[derive(Clone)]
pub struct Tree {
    raw: RawTree,
}

/// An iterator over the keys of a [`Tree`] and their frequencies, in sorted order.
///
/// This `struct` is created by the [`iter`] method on [`Tree`].
///
/// [`iter`]: Tree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: Inorder<'a>,
}

impl Tree {
    /// Makes a new, empty tree with the given mode.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::{Mode, Tree};
    ///
    /// let tree = Tree::new(Mode::Bst);
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.depth(), -1);
    /// ```
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Tree {
            raw: RawTree::new(mode),
        }
    }

    /// Makes a new, empty tree with room for at least `capacity` distinct keys.
    #[must_use]
    pub fn with_capacity(mode: Mode, capacity: usize) -> Self {
        Tree {
            raw: RawTree::with_capacity(mode, capacity),
        }
    }

    /// Returns the mode this tree was created with.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.raw.mode()
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if nothing has been inserted since creation or the last [`clear`](Tree::clear).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns how many distinct keys fit before the node storage grows.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Releases every node. The tree stays usable, in the same mode.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        debug!(mode = %self.mode(), keys = self.len(), "clearing tree");
        self.raw.clear();
    }

    /// Inserts one occurrence of `key` and returns its frequency afterwards.
    ///
    /// A new key gets a red node with a frequency of one; a known key only has its
    /// frequency incremented. In red-black mode the path back to the root is
    /// rebalanced either way.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty or longer than [`MAX_KEY_LEN`] bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::{Mode, Tree};
    ///
    /// let mut tree = Tree::new(Mode::Rbt);
    /// assert_eq!(tree.insert("word"), 1);
    /// assert_eq!(tree.insert("word"), 2);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) in red-black mode, O(n) worst case in plain mode.
    pub fn insert(&mut self, key: &str) -> u32 {
        check_key("insert", key);
        self.raw.insert(key)
    }

    /// Returns `true` if `key` has been inserted at least once.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty or longer than [`MAX_KEY_LEN`] bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::{Mode, Tree};
    ///
    /// let mut tree = Tree::new(Mode::Bst);
    /// tree.insert("apple");
    /// assert!(tree.contains("apple"));
    /// assert!(!tree.contains("pear"));
    /// ```
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        check_key("contains", key);
        self.raw.search(key).is_some()
    }

    /// Returns how many times `key` has been inserted, or `None` if never.
    #[must_use]
    pub fn frequency(&self, key: &str) -> Option<u32> {
        self.raw.search(key).map(|handle| self.raw.node(handle).frequency())
    }

    /// Returns the number of edges on the longest root-to-leaf path.
    ///
    /// An empty tree has depth −1 and a single key has depth 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::{Mode, Tree};
    ///
    /// let mut plain = Tree::new(Mode::Bst);
    /// let mut balanced = Tree::new(Mode::Rbt);
    /// plain.extend(["a", "b", "c", "d", "e"]);
    /// balanced.extend(["a", "b", "c", "d", "e"]);
    /// assert_eq!(plain.depth(), 4);
    /// assert!(balanced.depth() <= 2);
    /// ```
    #[must_use]
    pub fn depth(&self) -> isize {
        self.raw.depth()
    }

    /// Returns the root's color, or `None` for an empty tree.
    #[must_use]
    pub fn root_color(&self) -> Option<Color> {
        self.raw.root().map(|root| self.raw.node(root).color())
    }

    /// Colors the root black and rebalances at the root once more.
    ///
    /// Meant to be called once after a run of insertions. Does nothing on an empty
    /// tree, and in plain mode only the (unused) color changes.
    pub fn set_black_root(&mut self) {
        self.raw.set_black_root();
    }

    /// Calls `visit(frequency, key)` for every key in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::{Mode, Tree};
    ///
    /// let mut tree = Tree::new(Mode::Rbt);
    /// tree.extend(["pear", "fig", "pear"]);
    ///
    /// let mut lines = Vec::new();
    /// tree.inorder(|frequency, key| lines.push(format!("{frequency} {key}")));
    /// assert_eq!(lines, ["1 fig", "2 pear"]);
    /// ```
    pub fn inorder<F>(&self, mut visit: F)
    where
        F: FnMut(u32, &str),
    {
        for node in self.raw.inorder() {
            visit(node.frequency(), node.key());
        }
    }

    /// Calls `visit(frequency, key)` for every node, root first, then the left
    /// subtree, then the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::{Mode, Tree};
    ///
    /// let mut tree = Tree::new(Mode::Rbt);
    /// tree.extend(["a", "b", "c"]);
    ///
    /// let mut keys = Vec::new();
    /// tree.preorder(|_, key| keys.push(key.to_owned()));
    /// assert_eq!(keys, ["b", "a", "c"]);
    /// ```
    pub fn preorder<F>(&self, mut visit: F)
    where
        F: FnMut(u32, &str),
    {
        self.raw.preorder(|node| visit(node.frequency(), node.key()));
    }

    /// Gets an iterator over `(key, frequency)` pairs in sorted order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.raw.inorder(),
        }
    }
}

fn check_key(operation: &str, key: &str) {
    assert!(!key.is_empty(), "`Tree::{operation}()` - `key` is empty!");
    assert!(
        key.len() <= MAX_KEY_LEN,
        "`Tree::{operation}()` - `key` is longer than {MAX_KEY_LEN} bytes!"
    );
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| (node.key(), node.frequency()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Tree {
    type Item = (&'a str, u32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<S: AsRef<str>> Extend<S> for Tree {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key.as_ref());
        }
    }
}

impl Default for Tree {
    fn default() -> Self {
        Tree::new(Mode::default())
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
