use bitvec::prelude::*;

use crate::engine_types::PrimeResult;

/// `n` 以下の最大の整数平方根を 2 分探索で求める。
///
/// 浮動小数点の `sqrt` は大きな `n` や完全平方数の前後で 1 ずれることがあるため使わない。
pub fn integer_sqrt(n: u64) -> u64 {
    let mut low = 0u64;
    let mut high = n;
    while low <= high {
        let mid = low + ((high - low) >> 1);
        match mid.checked_mul(mid) {
            Some(val) if val == n => return mid,
            Some(val) if val < n => low = mid + 1,
            _ => high = mid - 1,
        }
    }
    high
}

/// マーカー配列の長さ `len` を `usize` に変換する。アドレスできない大きさならエラー。
pub(crate) fn marker_len(len: u64) -> PrimeResult<usize> {
    usize::try_from(len)
        .map_err(|e| format!("marker array of {len} entries does not fit in memory: {e}").into())
}

/// 単純なエラトステネスの篩で `[2, limit]` の素数を列挙する。
///
/// - `limit` が 0 または 1 の場合は空の列を返す。
/// - 各 `i` の倍数は `i * i` から消す（それより小さい倍数はより小さい素数で消えている）。
pub fn sieve_primes(limit: u64) -> PrimeResult<Vec<u64>> {
    if limit < 2 {
        return Ok(Vec::new());
    }

    let size = marker_len(limit.saturating_add(1))?;
    let mut is_prime = bitvec![1; size];

    let lim_sqrt = integer_sqrt(limit) as usize;
    for i in 2..=lim_sqrt {
        if is_prime[i] {
            for j in (i * i..size).step_by(i) {
                is_prime.set(j, false);
            }
        }
    }

    let primes = is_prime
        .iter_ones()
        .skip_while(|&i| i < 2)
        .map(|i| i as u64)
        .collect();
    Ok(primes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_sqrt_is_exact_around_perfect_squares() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(99), 9);
        assert_eq!(integer_sqrt(100), 10);
        assert_eq!(integer_sqrt(101), 10);
        assert_eq!(integer_sqrt(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn sieve_primes_small_limits() {
        assert_eq!(sieve_primes(0).unwrap(), Vec::<u64>::new());
        assert_eq!(sieve_primes(1).unwrap(), Vec::<u64>::new());
        assert_eq!(sieve_primes(2).unwrap(), vec![2]);
        assert_eq!(sieve_primes(10).unwrap(), vec![2, 3, 5, 7]);
        assert_eq!(sieve_primes(49).unwrap().last(), Some(&47));
    }
}
