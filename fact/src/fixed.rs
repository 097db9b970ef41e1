/// The largest `n` whose factorial fits in a `u64`.
pub const BASELINE: u32 = {
  let mut n: u32 = 0;
  let mut acc: u64 = 1;
  loop {
    match acc.checked_mul(n as u64 + 1) {
      Some(next) => {
        acc = next;
        n += 1;
      }
      None => break n,
    }
  }
};

/// `n!` in native arithmetic; `n` must not exceed [`BASELINE`].
pub const fn fixed_factorial(n: u32) -> u64 {
  debug_assert!(n <= BASELINE);
  if n == 0 {
    1
  } else {
    n as u64 * fixed_factorial(n - 1)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn baseline_is_twenty() {
    assert_eq!(BASELINE, 20);
    assert!(fixed_factorial(BASELINE).checked_mul(BASELINE as u64 + 1).is_none());
  }

  #[test]
  fn small_values() {
    let expected = [1, 1, 2, 6, 24, 120, 720, 5040, 40320, 362880, 3628800];
    for (n, &f) in expected.iter().enumerate() {
      assert_eq!(fixed_factorial(n as u32), f);
    }
    assert_eq!(fixed_factorial(20), 2432902008176640000);
  }

  #[test]
  fn recurrence() {
    for n in 1..=BASELINE {
      assert_eq!(fixed_factorial(n), n as u64 * fixed_factorial(n - 1));
    }
  }
}
