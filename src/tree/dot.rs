use std::fmt::Write as _;
use std::io;

use super::Tree;
use crate::mode::Color;
use crate::raw::Node;

const HEADER: [&str; 2] = ["digraph tree {", "node [shape = Mrecord, penwidth = 2];"];
const FOOTER: &str = "}";

impl Tree {
    /// Emits a Graphviz DOT description of the tree, one line at a time.
    ///
    /// The stream is a header, then for every node in pre-order its declaration
    /// (labelled `key:frequency`, colored `red` or `black`) followed by one edge per
    /// present child, left (`f1`) before right (`f2`), and finally a closing brace.
    /// Nodes of a plain tree are always colored `black`.
    ///
    /// Stops at, and returns, the first error from `sink`. Render the result with
    /// e.g. `dot -Tpdf < tree-view.dot > tree-view.pdf`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::{Mode, Tree};
    ///
    /// let mut tree = Tree::new(Mode::Rbt);
    /// tree.extend(["b", "a", "b"]);
    /// tree.set_black_root();
    ///
    /// let mut lines = Vec::new();
    /// tree.export_dot(|line| {
    ///     lines.push(line.to_owned());
    ///     Ok::<(), ()>(())
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(lines, [
    ///     "digraph tree {",
    ///     "node [shape = Mrecord, penwidth = 2];",
    ///     r#""b"[label="{<f0>b:2|{<f1>|<f2>}}"color=black];"#,
    ///     r#""b":f1 -> "a":f0;"#,
    ///     r#""a"[label="{<f0>a:1|{<f1>|<f2>}}"color=red];"#,
    ///     "}",
    /// ]);
    /// ```
    pub fn export_dot<E, F>(&self, mut sink: F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        let red_black = self.mode().is_red_black();
        let mut line = String::new();

        for header in HEADER {
            sink(header)?;
        }
        self.raw.try_preorder::<E, _>(|node| {
            line.clear();
            declare(&mut line, node, red_black);
            sink(&line)?;
            for (port, child) in [("f1", node.left()), ("f2", node.right())] {
                if let Some(child) = child {
                    line.clear();
                    edge(&mut line, node, port, self.raw.node(child));
                    sink(&line)?;
                }
            }
            Ok(())
        })?;
        sink(FOOTER)
    }

    /// Writes the DOT description from [`Tree::export_dot`] to `out`, one line per `\n`.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error raised by `out`.
    pub fn write_dot<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        self.export_dot(|line| writeln!(out, "{line}"))?;
        out.flush()
    }
}

fn declare(line: &mut String, node: &Node, red_black: bool) {
    let color = if red_black { node.color() } else { Color::Black };
    // Writing into a `String` cannot fail.
    let _ = write!(
        line,
        "\"{key}\"[label=\"{{<f0>{key}:{frequency}|{{<f1>|<f2>}}}}\"color={color}];",
        key = node.key(),
        frequency = node.frequency(),
    );
}

fn edge(line: &mut String, parent: &Node, port: &str, child: &Node) {
    let _ = write!(line, "\"{}\":{port} -> \"{}\":f0;", parent.key(), child.key());
}
