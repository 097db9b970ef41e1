use std::{
  error::Error,
  fmt::{self, Display, Write},
  str::FromStr,
};

/// A non-negative integer as a sequence of decimal digits.
///
/// Digits are stored least-significant first so that carries travel forward
/// through the vector; [`DigitSequence::digits`] and the `Display` impl present
/// them most-significant first. Zero is the single digit `0`, and no other
/// value has a leading zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitSequence(Vec<u8>);

/// Number of decimal digits in `u64::MAX`.
const U64_DIGITS: usize = 20;

#[allow(clippy::len_without_is_empty)]
impl DigitSequence {
  pub const RADIX: u8 = 10;

  pub fn zero() -> Self {
    DigitSequence(vec![0])
  }

  pub fn one() -> Self {
    DigitSequence(vec![1])
  }

  /// Builds a sequence from least-significant-first digits, stripping any high
  /// zero digits.
  pub fn new(mut lsf: Vec<u8>) -> Self {
    debug_assert!(lsf.iter().all(|&d| d < Self::RADIX), "digit out of range");
    while lsf.len() > 1 && lsf.last() == Some(&0) {
      lsf.pop();
    }
    if lsf.is_empty() {
      lsf.push(0);
    }
    DigitSequence(lsf)
  }

  /// Builds a sequence from most-significant-first digits.
  pub fn from_msf(msf: &[u8]) -> Self {
    Self::new(msf.iter().rev().copied().collect())
  }

  /// The number of digits; zero has one.
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_zero(&self) -> bool {
    self.0 == [0]
  }

  /// The digits, most significant first.
  pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
    self.0.iter().rev().copied()
  }

  pub(crate) fn lsf(&self) -> &[u8] {
    &self.0
  }

  pub fn to_u64(&self) -> Option<u64> {
    self.digits().try_fold(0u64, |n, d| n.checked_mul(Self::RADIX as u64)?.checked_add(d as u64))
  }
}

impl From<u64> for DigitSequence {
  fn from(mut n: u64) -> Self {
    let mut digits = Vec::with_capacity(U64_DIGITS);
    loop {
      digits.push((n % Self::RADIX as u64) as u8);
      n /= Self::RADIX as u64;
      if n == 0 {
        break;
      }
    }
    DigitSequence(digits)
  }
}

impl From<u8> for DigitSequence {
  fn from(n: u8) -> Self {
    (n as u64).into()
  }
}

impl From<u32> for DigitSequence {
  fn from(n: u32) -> Self {
    (n as u64).into()
  }
}

impl From<usize> for DigitSequence {
  fn from(n: usize) -> Self {
    (n as u64).into()
  }
}

impl Display for DigitSequence {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for d in self.digits() {
      f.write_char(char::from(b'0' + d))?;
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDigitsError {
  Empty,
  InvalidDigit(char),
}

impl Display for ParseDigitsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParseDigitsError::Empty => f.write_str("no digits"),
      ParseDigitsError::InvalidDigit(c) => write!(f, "invalid digit {c:?}"),
    }
  }
}

impl Error for ParseDigitsError {}

impl FromStr for DigitSequence {
  type Err = ParseDigitsError;

  /// Parses decimal text; `_` may be used as a separator.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut digits = Vec::with_capacity(s.len());
    for c in s.chars().rev() {
      if c == '_' {
        continue;
      }
      let digit = c.to_digit(Self::RADIX as u32).ok_or(ParseDigitsError::InvalidDigit(c))?;
      digits.push(digit as u8);
    }
    if digits.is_empty() {
      return Err(ParseDigitsError::Empty);
    }
    Ok(DigitSequence::new(digits))
  }
}
