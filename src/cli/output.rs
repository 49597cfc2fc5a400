use crate::Report;
use colored::*;
use std::io::{self, Write};
use std::path::Path;

/// Write one finding as it is discovered. Output is streamed per report, not
/// buffered until the end of the scan.
pub fn write_report<W: Write>(out: &mut W, report: &Report, colored: bool) -> io::Result<()> {
    if colored {
        writeln!(
            out,
            "typo {} at {}, did you mean {}?",
            format!("'{}'", report.pattern).red().bold(),
            format!("line {}", report.line).blue().bold(),
            format!("'{}'", report.expected).green()
        )
    } else {
        writeln!(
            out,
            "typo '{}' at line {}, did you mean '{}'?",
            report.pattern, report.line, report.expected
        )
    }
}

pub fn print_scan_summary(match_count: usize, path: &Path, colored: bool) {
    println!();
    if match_count == 0 {
        if colored {
            println!("{}", "✓ No typos found!".green().bold());
        } else {
            println!("✓ No typos found!");
        }
    } else {
        let typo_word = if match_count == 1 { "typo" } else { "typos" };
        if colored {
            println!(
                "{} {} {} found in {}",
                "✗".red().bold(),
                match_count.to_string().red().bold(),
                typo_word,
                path.display()
            );
        } else {
            println!("✗ {} {} found in {}", match_count, typo_word, path.display());
        }
    }
}
