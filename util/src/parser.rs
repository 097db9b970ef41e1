use std::{
  error::Error,
  fmt::{self, Display},
};

use logos::{Lexer, Logos};

use crate::lexer::Token;

/// What a line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
  Compute(u32),
  Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError<'src> {
  LexError(&'src str),
  InvalidNum(&'src str),
  OutOfRange { num: &'src str, max: u32 },
}

impl Display for ParseError<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParseError::LexError(found) => write!(f, "unexpected input `{found}`"),
      ParseError::InvalidNum(num) => write!(f, "`{num}` is not a valid number"),
      ParseError::OutOfRange { num, max } => {
        write!(f, "`{num}` is out of range; expected a number from 0 to {max}")
      }
    }
  }
}

impl Error for ParseError<'_> {}

type Parse<'src, T = ()> = Result<T, ParseError<'src>>;

/// Parses whitespace-separated, optionally signed integers.
///
/// A negative number, `quit`, or `exit` ends the input; anything after it is
/// not looked at.
pub struct InputParser<'src> {
  src: &'src str,
  lexer: Lexer<'src, Token>,
  max: u32,
}

impl<'src> InputParser<'src> {
  pub fn new(src: &'src str, max: u32) -> Self {
    InputParser { src, lexer: Token::lexer(src), max }
  }

  /// Parses a whole line; a line containing any error yields no requests.
  pub fn parse(src: &'src str, max: u32) -> Parse<'src, Vec<Request>> {
    let mut parser = InputParser::new(src, max);
    let mut requests = Vec::new();
    while let Some(request) = parser.parse_request()? {
      requests.push(request);
      if request == Request::Quit {
        break;
      }
    }
    Ok(requests)
  }

  pub fn parse_request(&mut self) -> Parse<'src, Option<Request>> {
    let Some(token) = self.lexer.next() else {
      return Ok(None);
    };
    let span = self.lexer.span();
    let word = self.word(span.start);
    if word.len() != span.len() {
      return Err(match token {
        Ok(Token::Num) => ParseError::InvalidNum(word),
        _ => ParseError::LexError(word),
      });
    }
    match token {
      Ok(Token::Num) => self.parse_num(word).map(Some),
      Ok(Token::Quit) => Ok(Some(Request::Quit)),
      Err(()) => Err(ParseError::LexError(word)),
    }
  }

  fn parse_num(&self, token: &'src str) -> Parse<'src, Request> {
    let (negative, digits) = match token.as_bytes() {
      [b'-', rest @ ..] => (true, rest),
      [b'+', rest @ ..] => (false, rest),
      rest => (false, rest),
    };
    let mut num = Some(0u32);
    for &byte in digits {
      if byte == b'_' {
        continue;
      }
      let digit = (byte as char).to_digit(10).ok_or(ParseError::InvalidNum(token))?;
      num = num.and_then(|n| n.checked_mul(10)?.checked_add(digit));
    }
    match num {
      _ if negative && num != Some(0) => Ok(Request::Quit),
      Some(n) if n <= self.max => Ok(Request::Compute(n)),
      _ => Err(ParseError::OutOfRange { num: token, max: self.max }),
    }
  }

  /// The whitespace-delimited word starting at `start`.
  fn word(&self, start: usize) -> &'src str {
    let rest = &self.src[start..];
    &rest[..rest.find(char::is_whitespace).unwrap_or(rest.len())]
  }
}
