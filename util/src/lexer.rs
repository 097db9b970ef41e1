use logos::Logos;

/// Tokens of a line of REPL input.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum Token {
  #[regex("[+-]?[0-9][0-9_]*")]
  Num,
  #[token("quit")]
  #[token("exit")]
  Quit,
}
