//! Integer helpers: factorial, primality and a memoized Fibonacci.

use crate::error::{Error, Result};
use ahash::AHashMap as HashMap;

/// Computes `n!`.
///
/// Fails with [`Error::Overflow`] once the result no longer fits in `u128`
/// (from `35!` onward).
pub fn factorial(n: u32) -> Result<u128> {
    (1..=u128::from(n)).try_fold(1u128, |acc, k| {
        acc.checked_mul(k)
            .ok_or(Error::Overflow("factorial exceeds u128"))
    })
}

/// Trial-division primality test. Values below 2 are not prime.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }

    let mut divisor: i64 = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Fibonacci numbers with an explicit, caller-owned cache.
///
/// `get(n)` is 1 for every `n <= 2`, including 0. Values are filled in
/// bottom-up so large `n` does not recurse.
///
/// ```
/// use sequtils::FibonacciMemo;
///
/// let mut fib = FibonacciMemo::new();
/// assert_eq!(fib.get(10).unwrap(), 55);
/// fib.reset();
/// assert!(fib.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct FibonacciMemo {
    cache: HashMap<u32, u128>,
}

impl FibonacciMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the `n`th Fibonacci number, caching every term computed.
    ///
    /// Fails with [`Error::Overflow`] past the largest term that fits in
    /// `u128` (term 186).
    pub fn get(&mut self, n: u32) -> Result<u128> {
        if n <= 2 {
            return Ok(1);
        }
        if let Some(&value) = self.cache.get(&n) {
            return Ok(value);
        }

        // Walk the cached prefix, carrying the last two terms forward
        let (mut before, mut last) = (1u128, 1u128);
        let mut k = 3;
        while let Some(&value) = self.cache.get(&k) {
            before = last;
            last = value;
            k += 1;
        }

        for i in k..=n {
            let next = before
                .checked_add(last)
                .ok_or(Error::Overflow("fibonacci term exceeds u128"))?;
            self.cache.insert(i, next);
            before = last;
            last = next;
        }

        log::trace!("fibonacci memo holds {} terms", self.cache.len());
        Ok(last)
    }

    /// Number of cached terms beyond the fixed base cases.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops every cached term.
    pub fn reset(&mut self) {
        self.cache.clear();
    }
}
