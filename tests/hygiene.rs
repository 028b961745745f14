//! Hygiene: scans the shell's source tree for constructs that panic or
//! silently drop errors. Every budget is zero; `*_test.rs` files are exempt.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
}

const PANIC_BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
];

const DISCARD_BUDGETS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0 },
    Budget { pattern: ".ok()", max: 0 },
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
];

fn production_sources(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") && !path.to_string_lossy().ends_with("_test.rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn check(budgets: &[Budget]) {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");

    for budget in budgets {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|(path, content)| {
                let count = content.lines().filter(|l| l.contains(budget.pattern)).count();
                (count > 0).then(|| format!("  {}: {count}", path.display()))
            })
            .collect();
        let total: usize = files
            .iter()
            .map(|(_, content)| content.lines().filter(|l| l.contains(budget.pattern)).count())
            .sum();
        assert!(
            total <= budget.max,
            "`{}` budget exceeded: found {total}, max {}.\n{}",
            budget.pattern,
            budget.max,
            hits.join("\n")
        );
    }
}

#[test]
fn no_panicking_constructs() {
    check(PANIC_BUDGETS);
}

#[test]
fn no_silent_discards() {
    check(DISCARD_BUDGETS);
}
