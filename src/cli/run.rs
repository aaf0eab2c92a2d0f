//! Command execution

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use super::args::Cli;
use super::error::{CliError, CliResult};
use crate::{Mode, Tree, Words};

/// Where `-o` writes the DOT description when `-f` is not given.
pub const DEFAULT_DOT_FILE: &str = "tree-view.dot";

/// Runs the program against the given streams.
///
/// `dictionary` supplies the words loaded into the tree. Reports go to `out`; timings
/// and the unknown-word count of a spell check go to `err`. The first matching mode
/// wins: spell check (`-c`), then depth (`-d`), then the default pre-order listing,
/// optionally preceded by writing a DOT file (`-o`).
///
/// # Errors
///
/// Returns a [`CliError`] if an input cannot be opened or read, the DOT file cannot
/// be created or written, or `out`/`err` fail.
pub fn run<R, O, E>(cli: &Cli, dictionary: R, out: &mut O, err: &mut E) -> CliResult<()>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    // Fail on a missing check file before reading the dictionary.
    let check = match &cli.check {
        Some(path) => Some(File::open(path).map_err(CliError::open(path))?),
        None => None,
    };

    let started = Instant::now();
    let tree = load(cli.mode(), dictionary)?;
    let fill = started.elapsed();

    if let Some(file) = check {
        return spell_check(&tree, BufReader::new(file), fill, out, err);
    }

    if cli.depth {
        writeln!(out, "{}", tree.depth()).map_err(CliError::io("writing depth"))?;
        return Ok(());
    }

    if cli.output {
        let path = cli.dot_file.as_deref().unwrap_or(Path::new(DEFAULT_DOT_FILE));
        writeln!(out, "Creating dot file '{}'", path.display()).map_err(CliError::io("writing report"))?;
        write_dot_file(&tree, path)?;
    }

    list(&tree, out)
}

/// Builds a tree from every word in `dictionary`, fixing the root color afterwards.
#[instrument(skip(dictionary))]
pub fn load<R: BufRead>(mode: Mode, dictionary: R) -> CliResult<Tree> {
    let mut tree = Tree::new(mode);
    let mut words = 0usize;
    for word in Words::new(dictionary) {
        let word = word.map_err(CliError::io("reading dictionary"))?;
        tree.insert(&word);
        words += 1;
    }
    if mode.is_red_black() {
        tree.set_black_root();
    }
    debug!(words, distinct = tree.len(), depth = tree.depth(), "dictionary loaded");
    Ok(tree)
}

/// Prints every word of `text` missing from the tree, then timings and a count on `err`.
fn spell_check<R, O, E>(tree: &Tree, text: R, fill: Duration, out: &mut O, err: &mut E) -> CliResult<()>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let started = Instant::now();
    let mut unknown = 0usize;
    for word in Words::new(text) {
        let word = word.map_err(CliError::io("reading check file"))?;
        if !tree.contains(&word) {
            writeln!(out, "{word}").map_err(CliError::io("writing unknown word"))?;
            unknown += 1;
        }
    }
    let search = started.elapsed();
    info!(unknown, "spell check finished");

    report_timings(err, fill, search, unknown).map_err(CliError::io("writing timings"))
}

fn report_timings<E: Write>(err: &mut E, fill: Duration, search: Duration, unknown: usize) -> io::Result<()> {
    writeln!(err, "Fill time\t: {:.6}", fill.as_secs_f64())?;
    writeln!(err, "Search time\t: {:.6}", search.as_secs_f64())?;
    writeln!(err, "Unknown words = {unknown}")
}

fn write_dot_file(tree: &Tree, path: &Path) -> CliResult<()> {
    let file = File::create(path).map_err(CliError::create(path))?;
    tree.write_dot(BufWriter::new(file))
        .map_err(CliError::io(format!("writing '{}'", path.display())))?;
    info!(path = %path.display(), "dot file written");
    Ok(())
}

/// Prints `frequency key` for every node in pre-order, the frequency left-aligned in four columns.
fn list<O: Write>(tree: &Tree, out: &mut O) -> CliResult<()> {
    let mut result = Ok(());
    tree.preorder(|frequency, key| {
        if result.is_ok() {
            result = writeln!(out, "{frequency:<4} {key}");
        }
    });
    result.map_err(CliError::io("writing listing"))
}
