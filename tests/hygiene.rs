//! Hygiene: scans the production sources for constructs the layout engine
//! must not ship with.
//!
//! Every budget is zero. Test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

/// Per-file count of lines containing `pattern`, skipping files that match `exempt`.
fn hits(files: &[SourceFile], pattern: &str, exempt: fn(&str) -> bool) -> Vec<(String, usize)> {
    files
        .iter()
        .filter(|file| !exempt(&file.path))
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn none(_: &str) -> bool {
    false
}

fn assert_absent(pattern: &str, exempt: fn(&str) -> bool) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern, exempt);
    let listing = found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found.is_empty(), "`{pattern}` is not allowed in production code:\n{listing}");
}

// =============================================================
// Panics
// =============================================================

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()", none);
}

#[test]
fn no_expect() {
    assert_absent(".expect(", none);
}

#[test]
fn no_panic() {
    assert_absent("panic!(", none);
}

#[test]
fn no_unreachable() {
    assert_absent("unreachable!(", none);
}

#[test]
fn no_todo() {
    assert_absent("todo!(", none);
}

#[test]
fn no_unimplemented() {
    assert_absent("unimplemented!(", none);
}

// =============================================================
// Silent loss
// =============================================================

#[test]
fn no_silent_discard() {
    assert_absent("let _ =", none);
}

#[test]
fn no_dot_ok() {
    assert_absent(".ok()", none);
}

#[test]
fn no_allow_dead_code() {
    assert_absent("#[allow(dead_code)]", none);
}

// =============================================================
// Logging
// =============================================================

#[test]
fn only_the_binary_installs_a_subscriber() {
    assert_absent("tracing_subscriber", |path| path.ends_with("main.rs"));
}

#[test]
fn library_does_not_print() {
    assert_absent("println!(", |path| path.ends_with("main.rs"));
}
