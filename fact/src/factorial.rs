use std::{
  error::Error,
  fmt::{self, Display},
  time::Instant,
};

use nohash_hasher::IntMap;

use crate::{
  digits::DigitSequence,
  fixed::{fixed_factorial, BASELINE},
  multiply::multiply_with,
  stats::Stats,
};

/// `n!` as decimal text.
pub fn factorial(n: u32) -> String {
  factorial_digits(n).to_string()
}

pub fn factorial_digits(n: u32) -> DigitSequence {
  factorial_with(n, &mut Stats::default())
}

/// Computes `n!`, in native arithmetic up to [`BASELINE`] and by repeated
/// digit multiplication past it.
pub fn factorial_with(n: u32, stats: &mut Stats) -> DigitSequence {
  if n <= BASELINE {
    stats.native += 1;
    fixed_factorial(n).into()
  } else {
    extend(seed(stats), BASELINE, n, stats)
  }
}

/// `BASELINE!` as digits.
pub fn seed(stats: &mut Stats) -> DigitSequence {
  stats.native += 1;
  fixed_factorial(BASELINE).into()
}

/// Given `acc == from!`, returns `to!`.
pub fn extend(mut acc: DigitSequence, from: u32, to: u32, stats: &mut Stats) -> DigitSequence {
  for i in from + 1..=to {
    acc = multiply_with(&acc, &DigitSequence::from(i), stats);
  }
  acc
}

/// Like [`factorial`], but reports arguments outside `0..=max` as errors.
pub fn checked_factorial(n: i64, max: u32) -> Result<String, FactorialError> {
  if n < 0 {
    return Err(FactorialError::Negative(n));
  }
  if n > max as i64 {
    return Err(FactorialError::TooLarge { n, max });
  }
  Ok(factorial(n as u32))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorialError {
  Negative(i64),
  TooLarge { n: i64, max: u32 },
}

impl Display for FactorialError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FactorialError::Negative(n) => write!(f, "factorial of negative number {n} is undefined"),
      FactorialError::TooLarge { n, max } => {
        write!(f, "{n} is larger than the supported maximum of {max}")
      }
    }
  }
}

impl Error for FactorialError {}

/// A table of computed factorials.
///
/// Arguments past [`BASELINE`] are grown from the largest smaller result
/// already in the table, so a session asking for increasing `n` only pays for
/// the new multiplications.
#[derive(Debug)]
pub struct Factorials {
  max: u32,
  known: IntMap<u32, DigitSequence>,
  pub stats: Stats,
}

impl Factorials {
  pub fn new(max: u32) -> Self {
    Factorials { max, known: IntMap::default(), stats: Stats::default() }
  }

  pub fn max(&self) -> u32 {
    self.max
  }

  pub fn get(&mut self, n: u32) -> Result<&DigitSequence, FactorialError> {
    if n > self.max {
      return Err(FactorialError::TooLarge { n: n as i64, max: self.max });
    }
    let start = Instant::now();
    self.stats.requests += 1;
    if self.known.contains_key(&n) {
      self.stats.cache_hits += 1;
    } else {
      let value = self.compute(n);
      self.known.insert(n, value);
    }
    self.stats.time_total += start.elapsed();
    Ok(&self.known[&n])
  }

  fn compute(&mut self, n: u32) -> DigitSequence {
    if n <= BASELINE {
      return factorial_with(n, &mut self.stats);
    }
    let closest = self.known.keys().copied().filter(|&m| m > BASELINE && m < n).max();
    match closest {
      Some(m) => extend(self.known[&m].clone(), m, n, &mut self.stats),
      None => {
        let seed = seed(&mut self.stats);
        extend(seed, BASELINE, n, &mut self.stats)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const F25: &str = "15511210043330985984000000";
  const F50: &str = "30414093201713378043612608166064768844377641568960512000000000000";
  const F100: &str = "93326215443944152681699238856266700490715968264381621468592963895217599993229915608941463976156518286253697920827223758251185210916864000000000000000000000000";

  #[test]
  fn small() {
    assert_eq!(factorial(0), "1");
    assert_eq!(factorial(1), "1");
    assert_eq!(factorial(5), "120");
    assert_eq!(factorial(20), "2432902008176640000");
  }

  #[test]
  fn across_the_baseline() {
    assert_eq!(factorial(21), "51090942171709440000");
    assert_eq!(factorial(25), F25);
    assert_eq!(factorial(50), F50);
    assert_eq!(factorial(100), F100);
  }

  #[test]
  fn agrees_with_native_arithmetic() {
    let mut native = 1u128;
    for n in 1..=34u32 {
      native *= n as u128;
      assert_eq!(factorial(n), native.to_string(), "{n}!");
    }
  }

  #[test]
  fn consecutive_ratio() {
    for n in BASELINE..60 {
      let next = &factorial_digits(n) * &DigitSequence::from(n + 1);
      assert_eq!(next, factorial_digits(n + 1));
    }
  }

  #[test]
  fn native_path_does_no_multiplications() {
    let mut stats = Stats::default();
    factorial_with(20, &mut stats);
    assert_eq!(stats.native, 1);
    assert_eq!(stats.multiplications, 0);

    factorial_with(23, &mut stats);
    assert_eq!(stats.native, 2);
    assert_eq!(stats.multiplications, 3);
    assert_eq!(stats.partial_products, 6);
  }

  #[test]
  fn checked() {
    assert_eq!(checked_factorial(3, 10), Ok("6".to_owned()));
    assert_eq!(checked_factorial(-1, 10), Err(FactorialError::Negative(-1)));
    assert_eq!(checked_factorial(11, 10), Err(FactorialError::TooLarge { n: 11, max: 10 }));
    assert_eq!(checked_factorial(25, 25), Ok(F25.to_owned()));
  }

  #[test]
  fn table_reuses_results() {
    let mut table = Factorials::new(1000);
    assert_eq!(table.get(25).unwrap().to_string(), F25);
    assert_eq!(table.stats.multiplications, 5);

    assert_eq!(table.get(50).unwrap().to_string(), F50);
    assert_eq!(table.stats.multiplications, 30);
    assert_eq!(table.stats.native, 1);

    assert_eq!(table.get(25).unwrap().to_string(), F25);
    assert_eq!(table.stats.cache_hits, 1);
    assert_eq!(table.stats.requests, 3);
    assert_eq!(table.stats.multiplications, 30);
  }

  #[test]
  fn table_order_does_not_matter() {
    let mut table = Factorials::new(1000);
    for n in [100, 0, 25, 21, 50, 20, 1, 100] {
      assert_eq!(table.get(n).unwrap(), &factorial_digits(n), "{n}!");
    }
    assert_eq!(table.stats.cache_hits, 1);
  }

  #[test]
  fn table_rejects_past_max() {
    let mut table = Factorials::new(30);
    assert_eq!(table.get(31), Err(FactorialError::TooLarge { n: 31, max: 30 }));
    assert_eq!(table.stats.requests, 0);
    assert!(table.get(30).is_ok());
  }
}
