//! Layer and path name sanitization, flattened filename synthesis.

use std::path::{Path, PathBuf};

/// Characters that cannot appear in a filename on common filesystems.
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace every filesystem-illegal character in a single path segment
/// with an underscore.
///
/// The replacement character is not itself illegal, so applying this twice
/// yields the same result as applying it once.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if ILLEGAL_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Sanitize every segment of a path independently, rejoining with the host
/// path separator. Separators between segments are preserved; illegal
/// characters within a segment are replaced.
pub fn sanitize_path(path: &Path) -> PathBuf {
    path.components()
        .map(|part| sanitize_name(&part.as_os_str().to_string_lossy()))
        .collect()
}

/// Collapse a group path into a single flat segment by joining its
/// components with underscores. An empty path yields an empty string.
pub fn flatten_path(path: &Path) -> String {
    let parts: Vec<String> = sanitize_path(path)
        .components()
        .map(|part| part.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("_")
}

/// Synthesize the output filename for a leaf layer.
///
/// The group ancestry is encoded as underscore-joined segments instead of
/// nested directories. Two layers whose flattened names coincide are not
/// deduplicated; the last one written wins on disk.
pub fn layer_filename(flat_parent: &str, leaf_name: &str) -> String {
    let leaf = sanitize_name(leaf_name);
    if flat_parent.is_empty() {
        format!("{}.png", leaf)
    } else {
        format!("{}_{}.png", flat_parent, leaf)
    }
}
