//! Interchangeable formulations of the LIS length.
//!
//! All four return the same value on every input:
//! - [`recursive_lis`] : include/skip decision recursion, exponential.
//! - [`memoized_lis`]  : the same recursion over `(position, previous index)`
//!   states, each solved once, O(n²) time, O(n) space.
//! - [`quadratic_lis`] : bottom-up `best[i]` table, O(n²) time, O(n) space.
//! - [`patience_lis`]  : smallest-tail array with binary search, O(n log n),
//!   run through [`LisEngine`].

use std::fmt;
use std::str::FromStr;

use crate::error::ParseStrategyError;
use crate::problems::patience::PatienceProblem;
use crate::LisEngine;

/// Which formulation to compute the LIS length with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Strategy {
    Recursive,
    Memoized,
    Quadratic,
    #[default]
    Patience,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Recursive,
        Strategy::Memoized,
        Strategy::Quadratic,
        Strategy::Patience,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Memoized => "memoized",
            Strategy::Quadratic => "quadratic",
            Strategy::Patience => "patience",
        }
    }

    /// Only the plain recursion blows up exponentially with input length.
    pub fn is_exponential(self) -> bool {
        matches!(self, Strategy::Recursive)
    }

    /// Strategies whose running time grows with `n²`.
    pub fn is_quadratic(self) -> bool {
        matches!(self, Strategy::Memoized | Strategy::Quadratic)
    }

    pub fn solve(self, seq: &[i64]) -> usize {
        match self {
            Strategy::Recursive => recursive_lis(seq),
            Strategy::Memoized => memoized_lis(seq),
            Strategy::Quadratic => quadratic_lis(seq),
            Strategy::Patience => patience_lis(seq),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStrategyError {
                name: s.to_string(),
            })
    }
}

/// Length of the longest strictly increasing subsequence of `seq`.
///
/// ```
/// assert_eq!(lis_dp::lis_length(&[10, 9, 2, 5, 3, 7, 101, 18]), 4);
/// assert_eq!(lis_dp::lis_length(&[]), 0);
/// ```
pub fn lis_length(seq: &[i64]) -> usize {
    Strategy::default().solve(seq)
}

/// Include/skip recursion without memoization. Exponential in `seq.len()`.
pub fn recursive_lis(seq: &[i64]) -> usize {
    fn go(seq: &[i64], prev: Option<i64>) -> usize {
        let Some((&x, rest)) = seq.split_first() else {
            return 0;
        };
        let skip = go(rest, prev);
        if prev.map_or(true, |p| x > p) {
            skip.max(1 + go(rest, Some(x)))
        } else {
            skip
        }
    }
    go(seq, None)
}

/// The include/skip recursion with each `(pos, prev)` state solved once.
///
/// States are filled from the last position backwards, so only one row of
/// `n + 1` previous-index slots is live at a time and nothing recurses.
/// Slot 0 means nothing has been taken yet, slot `p + 1` means the last
/// taken element is `seq[p]`.
pub fn memoized_lis(seq: &[i64]) -> usize {
    let n = seq.len();
    let mut row = vec![0usize; n + 1];
    for pos in (0..n).rev() {
        // row[pos + 1] still holds the answer for (pos + 1, Some(pos)).
        let take = 1 + row[pos + 1];
        for slot in 0..=pos {
            if slot == 0 || seq[slot - 1] < seq[pos] {
                row[slot] = row[slot].max(take);
            }
        }
    }
    row[0]
}

/// `best[i]` = longest strictly increasing subsequence ending exactly at `i`.
fn best_table(seq: &[i64]) -> (Vec<usize>, Vec<Option<usize>>) {
    let n = seq.len();
    let mut best = vec![1usize; n];
    let mut pred = vec![None; n];
    for i in 0..n {
        for j in 0..i {
            if seq[j] < seq[i] && best[j] + 1 > best[i] {
                best[i] = best[j] + 1;
                pred[i] = Some(j);
            }
        }
    }
    (best, pred)
}

pub fn quadratic_lis(seq: &[i64]) -> usize {
    best_table(seq).0.into_iter().max().unwrap_or(0)
}

/// Indices of one longest strictly increasing subsequence, from the
/// quadratic table and its predecessor links.
pub fn quadratic_witness(seq: &[i64]) -> Vec<usize> {
    let (best, pred) = best_table(seq);
    // First index holding the maximum.
    let Some(end) = (0..best.len()).max_by(|&a, &b| best[a].cmp(&best[b]).then(b.cmp(&a))) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(best[end]);
    let mut cur = Some(end);
    while let Some(i) = cur {
        out.push(i);
        cur = pred[i];
    }
    out.reverse();
    out
}

pub fn patience_lis(seq: &[i64]) -> usize {
    LisEngine::new(PatienceProblem::new(seq)).cost()
}
