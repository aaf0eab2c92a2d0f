//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::Mode;

/// Count word frequencies from stdin, or spell-check a file against them
#[derive(Parser, Debug)]
#[command(name = "wordtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Check the spelling of words in FILE, using words read from stdin as the dictionary
    #[arg(short = 'c', long = "check", value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub check: Option<PathBuf>,

    /// Print the depth of the tree after insertion
    #[arg(short = 'd', long)]
    pub depth: bool,

    /// Output the tree in DOT notation (to ./tree-view.dot unless -f is given)
    #[arg(short = 'o', long)]
    pub output: bool,

    /// File the DOT output of -o is written to
    #[arg(short = 'f', long = "file", value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub dot_file: Option<PathBuf>,

    /// Use a red-black tree instead of a plain binary search tree
    #[arg(short = 'r', long)]
    pub rbt: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The tree mode selected by `-r`.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.rbt { Mode::Rbt } else { Mode::Bst }
    }
}
