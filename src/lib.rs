pub mod checker;
pub mod cli;
pub mod patterns;

pub use checker::TypoChecker;
pub use patterns::{PatternGroup, PatternTable};

/// One finding: a known misspelling seen on a line, with the suggested fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<'a> {
    pub pattern: &'a str,
    pub line: usize,
    pub expected: &'a str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanSummary {
    pub match_count: usize,
}
