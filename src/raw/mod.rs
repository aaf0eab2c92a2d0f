mod arena;
mod handle;
mod node;
mod raw_tree;

pub(crate) use handle::Handle;
pub(crate) use node::Node;
pub(crate) use raw_tree::{Inorder, RawTree};
