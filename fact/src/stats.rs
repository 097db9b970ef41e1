use std::{
  fmt::{self, Display, Write},
  ops::AddAssign,
  str,
  time::Duration,
};

/// Statistics about the arithmetic performed to answer factorial requests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
  /// Requests answered by a [`crate::Factorials`] table.
  pub requests: u64,
  /// Requests answered from a previously computed result.
  pub cache_hits: u64,
  /// Factorials evaluated in native `u64` arithmetic, including seeds.
  pub native: u64,

  pub multiplications: u64,
  pub partial_products: u64,
  /// Single-digit products; the inner loop of every multiplication.
  pub digit_products: u64,
  /// Columns summed across all aligned partial products.
  pub columns: u64,

  /// The length of the longest product, in digits.
  pub digits_peak: u64,

  pub time_total: Duration,
}

impl Stats {
  /// Digit products per second.
  pub fn speed(&self) -> u64 {
    let secs = self.time_total.as_secs_f64();
    if secs == 0.0 {
      0
    } else {
      (self.digit_products as f64 / secs) as u64
    }
  }
}

impl Display for Stats {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let counts = [
      ("Requests", None),
      ("  Total", Some((self.requests, ""))),
      ("  Cached", Some((self.cache_hits, ""))),
      ("  Native", Some((self.native, ""))),
      ("", None),
      ("Arithmetic", None),
      ("  Multiplications", Some((self.multiplications, ""))),
      ("  Partial products", Some((self.partial_products, ""))),
      ("  Digit products", Some((self.digit_products, ""))),
      ("  Columns", Some((self.columns, ""))),
      ("", None),
      ("Result", None),
      ("  Peak", Some((self.digits_peak, "digits"))),
      ("", None),
    ];
    let performance = [
      ("Performance", None),
      ("  Time", Some((self.time_total.as_millis() as u64, "ms"))),
      ("  Speed", Some((self.speed(), "DPS"))),
    ];

    // Timings are left out of the column width so the layout of the counters
    // only depends on the work done.
    let max_label_width =
      counts.iter().chain(&performance).map(|x| x.0.len()).max().unwrap_or(0) + 1;
    let max_value =
      counts.iter().filter_map(|x| x.1).map(|x| x.0).max().unwrap_or(0).max(1_000_000_000);
    let max_value_width = measure_int(max_value);

    for (label, value) in counts.into_iter().chain(performance) {
      f.write_char('\n')?;
      f.write_str(label)?;
      if let Some((mut value, unit)) = value {
        let value_width = measure_int(value);
        let padding =
          (max_label_width + 2 + max_value_width).saturating_sub(label.len() + value_width);
        for _ in 0..padding {
          f.write_char(' ')?;
        }

        let mut text_buf = [0; measure_int(u64::MAX)];
        let mut index = text_buf.len();
        let mut digits = 0;
        while value != 0 || digits == 0 {
          if digits != 0 && digits % 3 == 0 {
            index -= 1;
            text_buf[index] = b'_';
          }
          index -= 1;
          text_buf[index] = b'0' + (value % 10) as u8;
          value /= 10;
          digits += 1;
        }
        f.write_str(str::from_utf8(&text_buf[index..]).map_err(|_| fmt::Error)?)?;

        if !unit.is_empty() {
          f.write_char(' ')?;
          f.write_str(unit)?;
        }
      }
    }

    Ok(())
  }
}

/// Count the number of characters needed to pretty-print an integer.
const fn measure_int(int: u64) -> usize {
  if int == 0 {
    1
  } else {
    let digits = int.ilog10() + 1;
    (digits + (digits - 1) / 3) as usize
  }
}

impl AddAssign<Stats> for Stats {
  fn add_assign(&mut self, rhs: Stats) {
    self.requests += rhs.requests;
    self.cache_hits += rhs.cache_hits;
    self.native += rhs.native;
    self.multiplications += rhs.multiplications;
    self.partial_products += rhs.partial_products;
    self.digit_products += rhs.digit_products;
    self.columns += rhs.columns;
    self.digits_peak = self.digits_peak.max(rhs.digits_peak);
    self.time_total += rhs.time_total;
  }
}
