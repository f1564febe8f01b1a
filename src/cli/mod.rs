pub mod average;
pub mod check;
pub mod completions;
pub mod init;
pub mod run;

use std::io::{self, IsTerminal};

use clap::{ArgAction, Parser, Subcommand};

use crate::error::Result;
use crate::output::Printer;
use crate::report::{render_json, render_text, DesignReport};

/// swatch - Average colours of nested design shapes
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a batch of designs concurrently and report their average colours
    Run(run::RunArgs),

    /// Average the designs in the given files
    Average(average::AverageArgs),

    /// Check design files for problems without averaging
    Check(check::CheckArgs),

    /// Initialize a swatch project (generates swatch.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Write reports to stdout as JSON or text.
///
/// Text output gets a colour swatch per line when stdout is a terminal.
pub(crate) fn print_reports(reports: &[DesignReport], json: bool, details: bool) -> Result<()> {
    if json {
        println!("{}", render_json(reports)?);
        return Ok(());
    }

    if !io::stdout().is_terminal() {
        print!("{}", render_text(reports, details));
        return Ok(());
    }

    let painter = Printer::with_color(true);
    for report in reports {
        let swatch = report.average.map(|c| painter.swatch(c)).unwrap_or_default();
        println!("{}{}", swatch, report.summary());
        if details {
            for shape in &report.shapes {
                println!("  {}{} {}", painter.swatch(shape.colour), shape.shape_id, shape.colour);
            }
        }
    }

    Ok(())
}
