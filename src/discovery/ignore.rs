use rustc_hash::FxHashSet;

use crate::core::error::{Result, UrliveError};
use crate::discovery::finder::extract_urls;

use std::fs;
use std::path::Path;

/// Deduplicate URLs preserving first-occurrence order.
///
/// Uniqueness is byte-identical string equality; `http://a` and
/// `https://a` stay separate candidates.
pub fn dedup_urls(urls: &[String]) -> Vec<String> {
    let mut seen = FxHashSet::with_capacity_and_hasher(urls.len(), Default::default());
    let mut unique = Vec::with_capacity(urls.len());

    for url in urls {
        if seen.insert(url.as_str()) {
            unique.push(url.clone());
        }
    }

    unique
}

/// Load ignore patterns from a file.
///
/// Empty lines and lines starting with `#` are skipped; URLs are
/// extracted from the remaining lines and deduplicated.
pub fn load_ignore_patterns(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            UrliveError::FileNotFound(path.display().to_string())
        } else {
            UrliveError::Io(e)
        }
    })?;

    let mut patterns = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        patterns.extend(extract_urls(line));
    }

    Ok(dedup_urls(&patterns))
}

/// Drop every candidate that starts with one of the ignore patterns.
pub fn apply_ignore_patterns(urls: Vec<String>, patterns: &[String]) -> Vec<String> {
    urls.into_iter()
        .filter(|url| !patterns.iter().any(|pattern| url.starts_with(pattern.as_str())))
        .collect()
}
