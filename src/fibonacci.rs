//! Fibonacci terms with `F(0) = F(1) = 1`.
//!
//! Three ways of computing the same numbers: a memo table filled top-down,
//! plain recursion, and an iterative sequence. All of them report
//! `Error::FibonacciOverflow` instead of wrapping once a term no longer fits
//! in a `u64`.

use tracing::Level;

use crate::error::Error;

/// First index whose term overflows a u64.
pub const FIRST_OVERFLOW: usize = 93;

/// Lookup table of already computed terms. Grows to the largest `n` asked
/// for and keeps its terms between calls.
#[derive(Debug, Default, Clone)]
pub struct Memo {
    lookup: Vec<Option<u64>>,
    pub hits: usize,
    pub misses: usize,
}

impl Memo {
    pub fn new() -> Memo {
        Memo::default()
    }

    /// Number of table slots, filled or not.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// The stored term for `n`, if it has been computed.
    pub fn cached(&self, n: usize) -> Option<u64> {
        self.lookup.get(n).copied().flatten()
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get(&mut self, n: usize) -> Result<u64, Error> {
        check_index(n)?;
        if self.lookup.len() <= n {
            self.lookup.resize(n + 1, None);
        }
        self.fill(n)
    }

    fn fill(&mut self, n: usize) -> Result<u64, Error> {
        if let Some(term) = self.lookup[n] {
            self.hits += 1;
            return Ok(term);
        }
        self.misses += 1;
        let term = if n < 2 {
            1
        } else {
            let a = self.fill(n - 1)?;
            let b = self.fill(n - 2)?;
            a.checked_add(b).ok_or(Error::FibonacciOverflow { n })?
        };
        tracing::event!(Level::TRACE, n, term, "Stored term");
        self.lookup[n] = Some(term);
        Ok(term)
    }
}

/// Rejects indices past the last term that fits, before any table is sized
/// or any recursion starts.
fn check_index(n: usize) -> Result<(), Error> {
    if n >= FIRST_OVERFLOW {
        return Err(Error::FibonacciOverflow { n: FIRST_OVERFLOW });
    }
    Ok(())
}

/// Plain recursion. Exponential in `n`.
pub fn naive(n: usize) -> Result<u64, Error> {
    check_index(n)?;
    if n < 2 {
        return Ok(1);
    }
    naive(n - 1)?
        .checked_add(naive(n - 2)?)
        .ok_or(Error::FibonacciOverflow { n })
}

/// The terms `F(0)` through `F(n)`.
#[tracing::instrument(level = "debug")]
pub fn sequence(n: usize) -> Result<Vec<u64>, Error> {
    check_index(n)?;
    let mut terms = vec![1u64; n.min(1) + 1];
    for i in 2..=n {
        let next = terms[i - 1]
            .checked_add(terms[i - 2])
            .ok_or(Error::FibonacciOverflow { n: i })?;
        terms.push(next);
    }
    Ok(terms)
}
