mod completion;
mod compute;
mod repl;

use anyhow::Result;
use clap::{Parser, Subcommand};
use completion::CompletionArgs;
use compute::ComputeArgs;
use repl::ReplArgs;

#[derive(Clone, Parser)]
#[command(
  name = "fact",
  version,
  about = "Exact factorials of large integers",
  propagate_version = true
)]
pub struct FactCliArgs {
  /// The largest argument that will be computed
  #[arg(long, env = "FACT_MAX", default_value = "10000", global = true)]
  pub max: u32,
  #[command(subcommand)]
  pub maybe_command: Option<FactCliCommand>,
}

pub struct FactCli {
  pub max: u32,
}

impl FactCli {
  pub fn execute(&self, maybe_command: Option<FactCliCommand>) -> Result<()> {
    match maybe_command {
      None => self.repl(ReplArgs::default()),
      Some(command) => match command {
        FactCliCommand::Repl(args) => self.repl(args),
        FactCliCommand::Compute(args) => self.compute(args),
        FactCliCommand::Completion(args) => self.completion(args),
      },
    }
  }
}

#[derive(Clone, Subcommand)]
pub enum FactCliCommand {
  #[command(about = "Read integers interactively and print their factorials")]
  Repl(ReplArgs),
  #[command(about = "Print the factorial of each argument")]
  Compute(ComputeArgs),
  #[command(about = "Print shell completions")]
  Completion(CompletionArgs),
}
