use anyhow::{bail, Result};
use clap::Args;

use fact::Factorials;
use fact_util::{InputParser, Request};

use super::FactCli;
use crate::StatsArgs;

impl FactCli {
  pub fn compute(&self, ComputeArgs { nums, stats }: ComputeArgs) -> Result<()> {
    let mut table = Factorials::new(self.max);
    for num in &nums {
      let mut parser = InputParser::new(num, table.max());
      let n = match parser.parse_request() {
        Ok(Some(Request::Compute(n))) => n,
        Ok(Some(Request::Quit)) | Ok(None) => {
          bail!("`{num}` is not a non-negative integer")
        }
        Err(err) => bail!("{err}"),
      };
      if !matches!(parser.parse_request(), Ok(None)) {
        bail!("expected a single number, found `{num}`");
      }
      println!("{n}! = {}", table.get(n)?);
    }
    stats.report(&table.stats);
    Ok(())
  }
}

#[derive(Debug, Clone, Args)]
pub struct ComputeArgs {
  #[arg(required = true, allow_hyphen_values = true)]
  nums: Vec<String>,
  #[command(flatten)]
  stats: StatsArgs,
}
