mod cli;
mod logging;

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;
use month_rows::Input;

use crate::cli::Cli;

fn main() {
  let cli = Cli::parse();
  logging::init(cli.verbose);

  if let Err(e) = run() {
    eprintln!("Error: {e:#}");
    process::exit(1);
  }
}

fn run() -> Result<()> {
  let input = Input::read(io::stdin().lock())?;
  tracing::info!(month = input.month, weekday = input.weekday, "Counting rows");
  let rows = input.row_count()?;
  println!("{rows}");
  Ok(())
}
