mod automation;
mod com;
mod commands;
mod counter;

use anyhow::Result;
use clap::Parser;
use commands::Command;
use counter::CountError;

/// a cli for the Word automation interface
#[derive(Parser)]
#[clap(version)]
struct Cli {
    #[clap(flatten)]
    command: commands::PageCountCommand,
}

impl Cli {
    pub fn execute<S: automation::WordService>(self, word: &S) -> Result<()> {
        self.command.execute(word)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let word = com::ComWord::new().map_err(CountError::ApplicationUnavailable)?;
    cli.execute(&word)?;

    Ok(())
}
