use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use super::{FactCli, FactCliArgs};

impl FactCli {
  pub fn completion(&self, CompletionArgs { shell }: CompletionArgs) -> Result<()> {
    generate(shell, &mut FactCliArgs::command(), "fact", &mut io::stdout());
    Ok(())
  }
}

#[derive(Debug, Clone, Args)]
pub struct CompletionArgs {
  #[arg(value_enum)]
  shell: Shell,
}
