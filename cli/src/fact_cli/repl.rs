use anyhow::Result;
use clap::Args;

use fact::Factorials;
use fact_util::{InputParser, Request};

use super::FactCli;
use crate::{LineReader, StatsArgs};

const BANNER: &str = "Enter a positive integer. Enter any negative number to quit.";

impl FactCli {
  pub fn repl(&self, ReplArgs { echo, stats }: ReplArgs) -> Result<()> {
    let mut table = Factorials::new(self.max);
    let mut lines = LineReader::new()?;
    println!("{BANNER}");
    'lines: while let Some(line) = lines.next_line()? {
      if echo {
        println!("{}{line}", LineReader::PROMPT);
      }
      let requests = match InputParser::parse(&line, table.max()) {
        Ok(requests) => requests,
        Err(err) => {
          println!("error: {err}");
          continue;
        }
      };
      for request in requests {
        match request {
          Request::Compute(n) => println!("{}", table.get(n)?),
          Request::Quit => break 'lines,
        }
      }
    }
    println!("Terminated");
    stats.report(&table.stats);
    Ok(())
  }
}

#[derive(Debug, Default, Clone, Args)]
pub struct ReplArgs {
  /// Print each line of input back before its results
  #[arg(long)]
  echo: bool,
  #[command(flatten)]
  stats: StatsArgs,
}
