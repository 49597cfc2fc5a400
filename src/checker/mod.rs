use crate::cli::output::write_report;
use crate::patterns::PatternTable;
use crate::{Report, ScanSummary};
use aho_corasick::AhoCorasick;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Scans files line by line against a compiled misspelling table.
pub struct TypoChecker {
    matcher: AhoCorasick,
    // (pattern, expected) pairs indexed by automaton pattern id.
    entries: Vec<(String, String)>,
}

impl TypoChecker {
    /// Compile the table into a multi-substring automaton. An empty table is
    /// legal and yields a checker that matches nothing.
    pub fn new(table: &PatternTable) -> Result<Self> {
        let entries: Vec<(String, String)> = table
            .iter()
            .map(|(pattern, expected)| (pattern.to_string(), expected.to_string()))
            .collect();

        let matcher = AhoCorasick::new(entries.iter().map(|(pattern, _)| pattern.as_str()))
            .context("failed to compile misspelling patterns")?;

        Ok(Self { matcher, entries })
    }

    /// Scan `path` sequentially, writing one report per (line, pattern) pair
    /// that matches. Reports stream to `out` as they are found, so anything
    /// already written stays written if a later read fails.
    ///
    /// Matching is case-sensitive substring containment. Line numbers are
    /// 1-based and count every physical line, blank or not.
    pub fn scan<W: Write>(&self, path: &Path, out: &mut W, colored: bool) -> Result<ScanSummary> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let reader = BufReader::new(file);

        let mut summary = ScanSummary::default();
        let mut seen = HashSet::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_number = idx + 1;
            let line = line.with_context(|| format!("failed to read {}", path.display()))?;

            // A pattern occurring twice on one line still yields one report.
            seen.clear();

            for m in self.matcher.find_overlapping_iter(&line) {
                let id = m.pattern().as_usize();
                if !seen.insert(id) {
                    continue;
                }

                let (pattern, expected) = &self.entries[id];
                let report = Report {
                    pattern,
                    line: line_number,
                    expected,
                };

                write_report(out, &report, colored)?;
                summary.match_count += 1;
            }
        }

        Ok(summary)
    }
}
