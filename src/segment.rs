//! 区間 `[start, end]` を篩うセグメント篩。
//!
//! 各呼び出しは自分用の種素数（`sqrt(end)` 以下の素数）とマーカー配列を作り、
//! 計算が終われば捨てる。ワーカー間で共有する可変状態は無い。

use bitvec::prelude::*;

use crate::engine_types::{PrimeResult, Segment};
use crate::sieve_math::{integer_sqrt, marker_len, sieve_primes};

/// `[start, end]` に含まれる素数を昇順で返す。
///
/// - `start >= 1` かつ `start <= end` が前提。満たさない場合はエラーを返す。
/// - 種素数 `p` 自身が区間内にある場合は素数のまま残す（消すのは `p` より大きい倍数だけ）。
/// - `start == 1` のとき、1 は素数ではないので先頭を消す。
pub fn segment_primes(start: u64, end: u64) -> PrimeResult<Vec<u64>> {
    if start == 0 {
        return Err("segment start must be >= 1".into());
    }
    if start > end {
        return Err(format!("segment start must be <= end (start={start}, end={end})").into());
    }

    let root_limit = integer_sqrt(end) + 1;
    let root_primes = sieve_primes(root_limit)?;

    let len = marker_len(end - start + 1)?;
    let mut is_prime = bitvec![1; len];

    for &p in &root_primes {
        let Some(first) = first_multiple_to_strike(start, p) else {
            continue;
        };
        if first > end {
            continue;
        }
        for n in (first..=end).step_by(p as usize) {
            is_prime.set((n - start) as usize, false);
        }
    }

    if start == 1 {
        is_prime.set(0, false);
    }

    Ok(is_prime.iter_ones().map(|j| start + j as u64).collect())
}

/// `p` の倍数のうち `start` 以上かつ `p` より大きい最小のもの。`u64` に収まらなければ None。
fn first_multiple_to_strike(start: u64, p: u64) -> Option<u64> {
    let first = start.div_ceil(p).checked_mul(p)?;
    if first == p {
        p.checked_add(p)
    } else {
        Some(first)
    }
}

impl Segment {
    /// このセグメントに含まれる素数を返す。`segment_primes(self.start, self.end)` と同じ。
    pub fn primes(&self) -> PrimeResult<Vec<u64>> {
        segment_primes(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_prime_inside_segment_is_kept() {
        assert_eq!(first_multiple_to_strike(1, 2), Some(4));
        assert_eq!(first_multiple_to_strike(2, 2), Some(4));
        assert_eq!(first_multiple_to_strike(3, 3), Some(6));
        assert_eq!(first_multiple_to_strike(10, 3), Some(12));
        assert_eq!(segment_primes(2, 3).unwrap(), vec![2, 3]);
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        assert!(segment_primes(0, 10).is_err());
        assert!(segment_primes(11, 10).is_err());
    }
}
