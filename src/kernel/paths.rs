//! 路径工具：目标解析、扩展名拆分、输入框选区、规范化、相对路径

use std::ops::Range;
use std::path::{Component, Path, PathBuf};

/// First selected path, or the active document when nothing is selected.
pub fn resolve_path(
    selection: &[PathBuf],
    active: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    match selection.first() {
        Some(path) => Some(path.clone()),
        None => active(),
    }
}

/// All selected paths, or the active document when nothing is selected.
pub fn resolve_paths(
    selection: &[PathBuf],
    active: impl FnOnce() -> Option<PathBuf>,
) -> Vec<PathBuf> {
    if selection.is_empty() {
        active().into_iter().collect()
    } else {
        selection.to_vec()
    }
}

/// Last component as text; the whole path when it has none (`/`, `..`).
pub fn leaf_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Splits off the last dotted suffix. Leading dots belong to the name, so
/// `.bashrc` has no extension.
pub fn split_extension(leaf: &str) -> (&str, &str) {
    match leaf.rfind('.') {
        Some(dot) if leaf[..dot].chars().any(|c| c != '.') => (&leaf[..dot], &leaf[dot..]),
        _ => (leaf, ""),
    }
}

/// Extension including every dotted part: `report.tar.gz` → `.tar.gz`.
pub fn full_extension(leaf: &str) -> &str {
    let (mut name, ext) = split_extension(leaf);
    if ext.is_empty() {
        return "";
    }
    while name.contains('.') {
        let (stem, part) = split_extension(name);
        if part.is_empty() {
            break;
        }
        name = stem;
    }
    &leaf[name.len()..]
}

/// Selection for the rename prompt: the leaf without its last extension.
pub fn rename_selection(leaf: &str) -> Range<usize> {
    let (name, _) = split_extension(leaf);
    0..name.chars().count()
}

/// Selection for the duplicate/move prompt pre-filled with `source`: the
/// basename without its (multi-part) extension.
pub fn path_selection(source: &Path) -> Range<usize> {
    let text = source.to_string_lossy();
    let total = text.chars().count();
    let leaf = match source.file_name() {
        Some(leaf) => leaf.to_string_lossy().to_string(),
        None => return total..total,
    };
    let trailing = text.len() - text.trim_end_matches(std::path::is_separator).len();
    let leaf_end = total - trailing;
    let start = leaf_end.saturating_sub(leaf.chars().count());
    let end = leaf_end.saturating_sub(full_extension(&leaf).chars().count());
    start..end.max(start)
}

/// Absolute, with `.` and `..` collapsed lexically. Symlinks are not resolved.
pub fn absolutize(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Case folding for platforms with case-insensitive paths.
#[cfg(windows)]
pub fn fold_case(path: &Path) -> PathBuf {
    PathBuf::from(path.to_string_lossy().to_lowercase().replace('/', "\\"))
}

#[cfg(not(windows))]
pub fn fold_case(path: &Path) -> PathBuf {
    path.to_path_buf()
}

/// Form used to compare two paths for identity.
pub fn comparable(path: &Path) -> PathBuf {
    fold_case(&absolutize(path))
}

/// Display path relative to the first workspace root containing `path`;
/// the basename when no root does.
pub fn relative_to_roots(path: &Path, roots: &[PathBuf]) -> String {
    for root in roots {
        if let Ok(rest) = path.strip_prefix(root) {
            if rest.as_os_str().is_empty() {
                return ".".to_string();
            }
            return rest.to_string_lossy().to_string();
        }
    }
    leaf_name(path)
}

/// Status text after a clipboard copy.
pub fn clipboard_summary(data: &str) -> String {
    let lines = data.split('\n').count();
    if lines > 1 {
        format!("Copied {} lines to clipboard", lines)
    } else {
        format!("Copied \"{}\" to clipboard", data)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/paths.rs"]
mod tests;
