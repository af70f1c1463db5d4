//! Source hygiene checks for the client crate.
//!
//! Scans the client crate's production sources for antipatterns. Each pattern
//! has a budget (ideally zero). If you must add one, fix an existing one first;
//! the budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics abort the WASM instance and blank the page.
    Budget { pattern: ".unwrap()", max: 0, why: "panics on None/Err" },
    Budget { pattern: ".expect(", max: 0, why: "panics on None/Err" },
    Budget { pattern: "panic!(", max: 0, why: "aborts the app" },
    Budget { pattern: "unreachable!(", max: 0, why: "aborts the app" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" },
    // Silent loss. Remaining uses are cfg-stub argument sinks and lenient parsing.
    Budget { pattern: "let _ =", max: 7, why: "discards a value without inspecting it" },
    Budget { pattern: ".ok()", max: 9, why: "drops an error without logging it" },
    // Style / structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `client/src/`, excluding test files.
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the client crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            failures.push(format!(
                "`{}` budget exceeded ({}): found {count}, max {}.\n{}",
                budget.pattern,
                budget.why,
                budget.max,
                format_hits(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}

#[test]
fn local_storage_is_only_touched_by_storage_module() {
    let files = source_files();
    let offenders: Vec<String> = hits(&files, ".local_storage()")
        .into_iter()
        .filter(|(path, _)| !path.ends_with("storage.rs"))
        .map(|(path, _)| path)
        .collect();
    assert!(offenders.is_empty(), "direct localStorage access outside util/storage.rs:\n{}", offenders.join("\n"));
}

#[test]
fn credential_is_only_written_by_token_store() {
    let files = source_files();
    let offenders: Vec<String> = hits(&files, "TOKEN_KEY")
        .into_iter()
        .filter(|(path, _)| !path.ends_with("token_store.rs"))
        .map(|(path, _)| path)
        .collect();
    assert!(offenders.is_empty(), "credential key used outside util/token_store.rs:\n{}", offenders.join("\n"));
}
