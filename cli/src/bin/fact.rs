use anyhow::Result;
use clap::Parser;
use fact_cli::{FactCli, FactCliArgs};

fn main() -> Result<()> {
  let FactCliArgs { max, maybe_command } = FactCliArgs::parse();
  FactCli { max }.execute(maybe_command)
}
