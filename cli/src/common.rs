use std::{
  io::{self, BufRead, IsTerminal, StdinLock},
  time::Duration,
};

use anyhow::Result;
use clap::Args;
use rustyline::{error::ReadlineError, DefaultEditor};

use fact::stats::Stats;

#[derive(Debug, Default, Clone, Args)]
pub struct StatsArgs {
  /// Print statistics about the arithmetic to stderr when done
  #[arg(long)]
  stats: bool,
  /// Leave timings out of the statistics
  #[arg(long)]
  no_perf: bool,
}

impl StatsArgs {
  pub fn report(&self, stats: &Stats) {
    if self.stats {
      let mut stats = *stats;
      if self.no_perf {
        stats.time_total = Duration::ZERO;
      }
      eprintln!("{stats}");
    }
  }
}

/// Where the REPL reads its lines from: a line editor on a terminal, plain
/// stdin otherwise.
pub enum LineReader {
  Editor(Box<DefaultEditor>),
  Piped(StdinLock<'static>),
}

impl LineReader {
  pub const PROMPT: &'static str = "> ";

  pub fn new() -> Result<Self> {
    if io::stdin().is_terminal() {
      Ok(LineReader::Editor(Box::new(DefaultEditor::new()?)))
    } else {
      Ok(LineReader::Piped(io::stdin().lock()))
    }
  }

  /// The next line without its terminator, or `None` once the input ends.
  pub fn next_line(&mut self) -> Result<Option<String>> {
    match self {
      LineReader::Editor(editor) => match editor.readline(Self::PROMPT) {
        Ok(line) => {
          editor.add_history_entry(line.as_str())?;
          Ok(Some(line))
        }
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
        Err(err) => Err(err.into()),
      },
      LineReader::Piped(stdin) => {
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
          return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
      }
    }
  }
}
