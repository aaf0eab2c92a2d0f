use alloc::boxed::Box;

use super::handle::Handle;
use crate::mode::Color;

/// Which child link of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A single distinct key and how many times it has been inserted.
///
/// Child links are arena handles, so a rotation only rewrites links; the key,
/// frequency and slot of every node stay put.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    key: Box<str>,
    frequency: u32,
    color: Color,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl Node {
    /// Creates a red leaf with a frequency of one.
    pub(crate) fn new(key: &str) -> Self {
        Self {
            key: key.into(),
            frequency: 1,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub(crate) fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Records one more insertion of this node's key. Returns the new count.
    pub(crate) fn bump(&mut self) -> u32 {
        self.frequency = self.frequency.saturating_add(1);
        self.frequency
    }

    #[inline]
    pub(crate) fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}
