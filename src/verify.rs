use crate::engine_types::PrimeResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    /// 検証した素数の個数。
    pub count: usize,
    /// Miller-Rabin によって末尾から実際にチェックした件数。
    pub checked_tail: usize,
    /// 最初の値（空なら None）。
    pub min: Option<u64>,
    /// 最後の値（空なら None）。
    pub max: Option<u64>,
}

/// 64bit 整数に対する決定的 Miller-Rabin 素数判定。
///
/// 篩の結果を篩とは独立した方法で確かめるために使う。
///
/// 参考: https://miller-rabin.appspot.com/ （64bit 用の既知の基数セット）
pub fn is_probable_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // n-1 = d * 2^s を求める
    let mut d = n - 1;
    let mut s = 0u32;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    const BASES: [u64; 7] = [2, 325, 9375, 28178, 450775, 9780504, 1795265022];

    for &a in &BASES {
        if a % n == 0 {
            continue;
        }
        if !miller_rabin_round(n, d, s, a) {
            return false;
        }
    }
    true
}

fn miller_rabin_round(n: u64, d: u64, s: u32, a: u64) -> bool {
    let mut x = mod_pow(a % n, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }

    for _ in 1..s {
        x = mod_mul(x, x, n);
        if x == n - 1 {
            return true;
        }
    }
    false
}

fn mod_mul(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn mod_pow(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut res = 1u64;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            res = mod_mul(res, base, m);
        }
        base = mod_mul(base, base, m);
        exp >>= 1;
    }
    res
}

/// 試し割りによる素数判定。遅いが篩とも Miller-Rabin とも独立した基準になる。
pub fn is_prime_trial_division(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// 篩の結果（素数列）を検証する。
///
/// - 狭義単調増加であること（重複・逆順が無い）
/// - 2 以外の偶数が無いこと
/// - 末尾 `sample_tail` 件が Miller-Rabin で素数と判定されること
pub fn verify_primes(primes: &[u64], sample_tail: usize) -> PrimeResult<VerifyReport> {
    for (i, pair) in primes.windows(2).enumerate() {
        let (prev, current) = (pair[0], pair[1]);
        if current <= prev {
            return Err(format!(
                "Non-increasing sequence at index {}: prev={prev}, current={current}",
                i + 1
            )
            .into());
        }
    }

    if let Some((i, &n)) = primes.iter().enumerate().find(|&(_, &n)| n != 2 && n % 2 == 0) {
        return Err(format!("Even composite candidate at index {i}: {n}").into());
    }

    let tail_start = primes.len().saturating_sub(sample_tail);
    for (i, &n) in primes.iter().enumerate().skip(tail_start) {
        if !is_probable_prime(n) {
            return Err(format!("Composite detected among tail sample at index {i}: {n}").into());
        }
    }

    Ok(VerifyReport {
        count: primes.len(),
        checked_tail: primes.len() - tail_start,
        min: primes.first().copied(),
        max: primes.last().copied(),
    })
}
