//! Source scans backing the layering contract tests.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One line of crate source, addressed relative to the manifest directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub path: String,
    pub number: usize,
    pub text: String,
}

impl fmt::Display for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path, self.number, self.text.trim())
    }
}

/// Every `.rs` file below `dir` (relative to the crate root), in path order.
fn rust_sources(dir: &str) -> Vec<(String, String)> {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut pending = vec![manifest.join(dir)];
    let mut found: Vec<PathBuf> = Vec::new();

    while let Some(next) = pending.pop() {
        let listing = fs::read_dir(&next)
            .unwrap_or_else(|e| panic!("cannot list {}: {e}", next.display()));
        for entry in listing.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                found.push(path);
            }
        }
    }
    found.sort();

    found
        .into_iter()
        .map(|path| {
            let source = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
            let shown = path
                .strip_prefix(manifest)
                .unwrap_or(&path)
                .to_string_lossy()
                .replace('\\', "/");
            (shown, source)
        })
        .collect()
}

fn lines_of<'a>(path: &str, source: &'a str) -> impl Iterator<Item = SourceLine> + 'a {
    let path = path.to_string();
    source.lines().enumerate().map(move |(idx, text)| SourceLine {
        path: path.clone(),
        number: idx + 1,
        text: text.to_string(),
    })
}

/// Lines under `dir` mentioning any of `needles`.
pub fn find_lines_containing(dir: &str, needles: &[&str]) -> Vec<SourceLine> {
    rust_sources(dir)
        .iter()
        .flat_map(|(path, source)| lines_of(path, source).collect::<Vec<_>>())
        .filter(|line| needles.iter().any(|needle| line.text.contains(needle)))
        .collect()
}

/// Lines in `mod.rs` files under `dir` other than module declarations,
/// `use` items (single or multi-line), attributes on those, and comments.
pub fn find_non_export_lines_in_mod_files(dir: &str) -> Vec<SourceLine> {
    let mut offending = Vec::new();

    for (path, source) in rust_sources(dir) {
        if !path.ends_with("/mod.rs") {
            continue;
        }

        let mut open_use = false;
        for line in lines_of(&path, &source) {
            let item = line.text.trim();
            let starts_use = item.starts_with("use ") || item.starts_with("pub use ");
            if open_use || starts_use {
                open_use = !item.ends_with(';');
                continue;
            }

            let allowed = item.is_empty()
                || item.starts_with("//")
                || item.starts_with("#[cfg")
                || item.starts_with("mod ")
                || item.starts_with("pub mod ");
            if !allowed {
                offending.push(line);
            }
        }
    }

    offending
}
