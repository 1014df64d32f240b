use grep::regex::RegexMatcher;
use grep::searcher::Searcher;
use grep::searcher::sinks::UTF8;
use linkify::{LinkFinder, LinkKind};
use once_cell::sync::Lazy;
use rayon::prelude::*;

use crate::core::error::Result;

use std::path::Path;

/// Cheap first-pass filter: lines matching this are handed to the link
/// finder for exact extraction.
const URL_LINE_PATTERN: &str =
    r#"(http://|https://)[a-z0-9]+([-.]{1}[a-z0-9]+)*(.[a-z]{2,5})?(:[0-9]{1,5})?(/.*)?"#;

static REGEX_MATCHER: Lazy<RegexMatcher> = Lazy::new(|| {
    RegexMatcher::new(URL_LINE_PATTERN).expect("Failed to compile URL line pattern")
});

// Reuse LinkFinder instance across lines and files
static LINK_FINDER: Lazy<LinkFinder> = Lazy::new(|| {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    finder
});

pub trait UrlFinder {
    fn find_urls(&self, paths: Vec<&Path>) -> Result<Vec<String>>;
}

#[derive(Default, Debug)]
pub struct Finder {}

impl UrlFinder for Finder {
    /// Extract every URL from the given files, in file-then-line order.
    ///
    /// Files are processed in parallel; the per-file URL lists are then
    /// flattened in input order so the result is deterministic.
    fn find_urls(&self, paths: Vec<&Path>) -> Result<Vec<String>> {
        let per_file: Result<Vec<Vec<String>>> = paths
            .par_iter()
            .map(|path| -> Result<Vec<String>> {
                let lines = Self::lines_with_urls(path)?;
                let mut file_urls = Vec::with_capacity(lines.len());
                for line in lines {
                    file_urls.extend(extract_urls(&line));
                }
                Ok(file_urls)
            })
            .collect();

        Ok(per_file?.into_iter().flatten().collect())
    }
}

impl Finder {
    /// First stage: pick out the lines of a file that look like they
    /// contain a URL.
    fn lines_with_urls(path: &Path) -> Result<Vec<String>> {
        let mut matches = vec![];
        Searcher::new().search_path(
            &*REGEX_MATCHER,
            path,
            UTF8(|_line_number, line| {
                matches.push(line.trim().to_string());
                Ok(true)
            }),
        )?;

        Ok(matches)
    }
}

/// Second stage: extract the actual URLs from a line of text.
pub fn extract_urls(line: &str) -> Vec<String> {
    LINK_FINDER
        .links(line)
        .map(|link| link.as_str().to_string())
        .collect()
}
