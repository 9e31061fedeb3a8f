//! Theme rewrite engine — swap legacy gold theme tokens for the olive accent
//! palette across a static frontend tree.
//!
//! The engine:
//! 1. Walks the root directory, pruning `node_modules` at any depth
//! 2. Selects files ending in `.html`, `.css`, or `.js`
//! 3. Applies the fixed replacement table in order, each entry as a global
//!    literal substring replace over the current content
//! 4. Writes back only files whose content actually changed

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};

// ============================================================================
// Replacement table
// ============================================================================

/// The fixed rebranding table, in application order. Each entry is applied
/// fully across the working content before the next entry is considered.
///
/// The last two keys both collapse onto the same olive literal: two legacy
/// gold tones map to one accent color. That is intentional, not a duplicate.
pub const REPLACEMENTS: [(&str, &str); 8] = [
    ("text-gold", "text-accent"),
    ("badge-gold", "badge-accent"),
    ("btn-gold", "btn-accent"),
    ("var(--color-gold)", "var(--color-olive)"),
    ("var(--color-gold-light)", "var(--color-olive-light)"),
    ("var(--color-gold-dark)", "var(--color-olive-dark)"),
    ("rgba(212, 175, 55,", "rgba(47, 79, 62,"),
    ("rgba(184, 149, 106,", "rgba(47, 79, 62,"),
];

/// Dependency-cache directory excluded from traversal at any depth.
const SKIP_DIR: &str = "node_modules";

/// File name suffixes eligible for rewriting (case-sensitive exact suffix).
const THEME_SUFFIXES: [&str; 3] = [".html", ".css", ".js"];

/// Start marker emitted before the walk begins.
pub const START_MARKER: &str = "Starting replacement...";

/// Completion marker emitted after every file has been visited.
pub const DONE_MARKER: &str = "Replacement complete.";

// ============================================================================
// Types
// ============================================================================

/// A pending content edit for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileEdit {
    /// Path exactly as constructed by the traversal.
    pub path: PathBuf,
    /// Number of replaced occurrences across all table entries.
    pub replacements: usize,
    /// New content after all replacements.
    #[serde(skip)]
    pub new_content: String,
}

/// A file that failed to read or write. The failure is reported inline and
/// never aborts the run.
#[derive(Debug, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub detail: String,
}

/// Totals for one full run.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_updated: usize,
    pub failures: Vec<FileFailure>,
}

// ============================================================================
// File walking
// ============================================================================

/// Collect every eligible file under `root`.
///
/// Any directory named `node_modules` is skipped entirely, at any depth —
/// nothing under it is read. An unreadable root is an error; unreadable
/// subdirectories are skipped.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root).map_err(|source| Error::RootUnreadable {
        path: root.display().to_string(),
        source,
    })?;

    let mut files = Vec::new();
    visit_entries(entries, &mut files);
    Ok(files)
}

fn walk_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    visit_entries(entries, files);
}

fn visit_entries(entries: fs::ReadDir, files: &mut Vec<PathBuf>) {
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if name == SKIP_DIR {
                continue;
            }
            walk_recursive(&path, files);
        } else if is_theme_file(&path) {
            files.push(path);
        }
    }
}

fn is_theme_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    THEME_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

// ============================================================================
// Planning and applying edits
// ============================================================================

/// Read `path` as UTF-8 and apply the replacement table in order.
///
/// Returns `Ok(None)` when the content is unchanged. Read and decode failures
/// surface as the underlying `io::Error` for per-file reporting.
pub fn plan_file(path: &Path) -> std::io::Result<Option<FileEdit>> {
    let content = fs::read_to_string(path)?;

    let mut new_content = content.clone();
    let mut replacements = 0;
    for (old, new) in REPLACEMENTS {
        let hits = new_content.matches(old).count();
        if hits > 0 {
            new_content = new_content.replace(old, new);
            replacements += hits;
        }
    }

    if new_content == content {
        return Ok(None);
    }

    Ok(Some(FileEdit {
        path: path.to_path_buf(),
        replacements,
        new_content,
    }))
}

/// Write the new content back over the original file.
pub fn apply_edit(edit: &FileEdit) -> std::io::Result<()> {
    fs::write(&edit.path, &edit.new_content)
}

// ============================================================================
// Run driver
// ============================================================================

/// Rewrite every eligible file under `root`, one file at a time, streaming
/// progress lines to `out`:
///
/// - the start marker,
/// - one `Updating <path>` line per modified file (before its write),
/// - one `Error processing <path>: <detail>` line per failed file,
/// - the completion marker.
///
/// Per-file failures never abort the run; the completion marker is always
/// reached unless the root itself cannot be traversed or `out` fails.
pub fn rewrite_tree(root: &Path, out: &mut dyn Write) -> Result<RunSummary> {
    writeln!(out, "{}", START_MARKER)?;

    let files = walk_files(root)?;
    let mut summary = RunSummary {
        files_scanned: files.len(),
        ..Default::default()
    };

    for path in &files {
        match plan_file(path) {
            Ok(Some(edit)) => {
                writeln!(out, "Updating {}", path.display())?;
                match apply_edit(&edit) {
                    Ok(()) => summary.files_updated += 1,
                    Err(e) => report_failure(out, &mut summary, path, &e)?,
                }
            }
            Ok(None) => {}
            Err(e) => report_failure(out, &mut summary, path, &e)?,
        }
    }

    writeln!(out, "{}", DONE_MARKER)?;
    Ok(summary)
}

fn report_failure(
    out: &mut dyn Write,
    summary: &mut RunSummary,
    path: &Path,
    error: &std::io::Error,
) -> Result<()> {
    writeln!(out, "Error processing {}: {}", path.display(), error)?;
    summary.failures.push(FileFailure {
        path: path.to_path_buf(),
        detail: error.to_string(),
    });
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
