use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use console::Term;
use std::io::{self, Write};
use std::path::PathBuf;
use typochk::patterns::PatternTable;
use typochk::{checker, cli};

#[derive(Parser, Debug)]
#[command(name = "typochk")]
#[command(version, about = "A blazingly fast typo checker CLI", long_about = None)]
struct Cli {
    /// File to check
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    // Usage and argument errors belong on stdout, like the reports themselves.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            print!("{}", err.render());
            io::stdout().flush().ok();
            std::process::exit(err.exit_code());
        }
    };

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "typochk", &mut io::stdout());
        return Ok(());
    }

    let Some(file) = cli.file else {
        println!("No file specified. Usage: typochk <FILE>");
        std::process::exit(1);
    };

    let colored = Term::stdout().is_term();

    // The misspelling catalogue is bundled into the binary; a parse failure
    // here is fatal and not retryable.
    let table = PatternTable::load_embedded()?;
    let checker = checker::TypoChecker::new(&table)?;

    let summary = {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        checker.scan(&file, &mut out, colored)?
    };

    cli::output::print_scan_summary(summary.match_count, &file, colored);

    Ok(())
}
