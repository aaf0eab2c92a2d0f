use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use clap::Parser;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;
use wordtree::cli::{Cli, CliError, run};

/// Runs the program in-process, returning (stdout, stderr).
fn run_with(args: &[&str], dictionary: &str) -> Result<(String, String), CliError> {
    let cli = Cli::try_parse_from(std::iter::once("wordtree").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    run(&cli, dictionary.as_bytes(), &mut out, &mut err)?;
    Ok((String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap()))
}

#[test]
fn default_lists_preorder_with_frequencies() {
    let (out, err) = run_with(&[], "The cat, the hat.").unwrap();
    assert_eq!(out, "2    the\n1    cat\n1    hat\n");
    assert_eq!(err, "");
}

#[test]
fn red_black_listing_is_rebalanced() {
    let (out, _) = run_with(&["-r"], "a b c").unwrap();
    assert_eq!(out, "1    b\n1    a\n1    c\n");
}

#[rstest]
#[case(&[], "a b c d e", "4\n")]
#[case(&["-r"], "a b c d e", "2\n")]
#[case(&["-r"], "", "-1\n")]
#[case(&[], "solo solo", "0\n")]
fn depth_flag(#[case] flags: &[&str], #[case] dictionary: &str, #[case] expected: &str) {
    let mut args = vec!["-d"];
    args.extend_from_slice(flags);
    let (out, _) = run_with(&args, dictionary).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn check_reports_unknown_words() {
    let dir = TempDir::new().unwrap();
    let text = dir.path().join("text.txt");
    fs::write(&text, "Apple pie, and CHERRY tart; apple again.").unwrap();

    let (out, err) = run_with(&["-r", "-c", text.to_str().unwrap(), "-d"], "apple banana cherry").unwrap();
    assert_eq!(out, "pie\nand\ntart\nagain\n");

    let lines: Vec<_> = err.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Fill time\t: "));
    assert!(lines[1].starts_with("Search time\t: "));
    assert_eq!(lines[2], "Unknown words = 4");
}

#[test]
fn missing_check_file_fails_fast() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let error = run_with(&["-c", missing.to_str().unwrap()], "words").unwrap_err();
    assert!(matches!(error, CliError::Open { .. }));
    assert_eq!(error.exit_code(), 66);
}

#[test]
fn output_writes_dot_file_then_lists() {
    let dir = TempDir::new().unwrap();
    let dot = dir.path().join("graph.dot");
    let dot_name = dot.to_str().unwrap();

    let (out, _) = run_with(&["-o", "-f", dot_name], "b a b").unwrap();
    assert_eq!(out, format!("Creating dot file '{dot_name}'\n2    b\n1    a\n"));

    let written = fs::read_to_string(&dot).unwrap();
    assert_eq!(
        written,
        concat!(
            "digraph tree {\n",
            "node [shape = Mrecord, penwidth = 2];\n",
            "\"b\"[label=\"{<f0>b:2|{<f1>|<f2>}}\"color=black];\n",
            "\"b\":f1 -> \"a\":f0;\n",
            "\"a\"[label=\"{<f0>a:1|{<f1>|<f2>}}\"color=black];\n",
            "}\n",
        )
    );
}

#[test]
fn file_without_output_is_ignored() {
    let dir = TempDir::new().unwrap();
    let dot = dir.path().join("unused.dot");
    let (out, _) = run_with(&["-f", dot.to_str().unwrap()], "x").unwrap();
    assert_eq!(out, "1    x\n");
    assert!(!dot.exists());
}

#[test]
fn uncreatable_dot_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let dot = dir.path().join("no-such-dir").join("graph.dot");
    let error = run_with(&["-o", "-f", dot.to_str().unwrap()], "x").unwrap_err();
    assert!(matches!(error, CliError::Create { .. }));
    assert_eq!(error.exit_code(), 73);
}

// ─── The built binary ────────────────────────────────────────────────────────

#[test]
fn binary_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wordtree"))
        .args(["-r", "-d"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"a b c d e f g").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "3\n");
}

#[test]
fn binary_exits_with_noinput_for_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let output = Command::new(env!("CARGO_BIN_EXE_wordtree"))
        .arg("-c")
        .arg(&missing)
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(66));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: can't find file"), "stderr was {stderr:?}");
}
