//! proptest による性質テスト。
//!
//! 分割篩・並列篩の結果を、単純な篩および試し割りと突き合わせる。

use proptest::prelude::*;
use sosu_bunkatsu::cpu_engine::{multithreaded_segmented_primes, partition};
use sosu_bunkatsu::segment::segment_primes;
use sosu_bunkatsu::sieve_math::sieve_primes;
use sosu_bunkatsu::verify::{is_prime_trial_division, is_probable_prime, verify_primes};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// 基本篩は `[2, limit]` の素数をちょうど昇順で返す。
    #[test]
    fn base_sieve_is_exact(limit in 0u64..3_000) {
        let primes = sieve_primes(limit).unwrap();
        let expected: Vec<u64> = (0..=limit).filter(|&n| is_prime_trial_division(n)).collect();
        prop_assert_eq!(primes, expected);
    }

    /// セグメント篩の結果は、基本篩の結果を `[start, end]` に絞ったものと一致する。
    #[test]
    fn segment_equals_filtered_base_sieve(start in 1u64..5_000, len in 0u64..2_000) {
        let end = start + len;
        let expected: Vec<u64> = sieve_primes(end)
            .unwrap()
            .into_iter()
            .filter(|&p| p >= start)
            .collect();
        prop_assert_eq!(segment_primes(start, end).unwrap(), expected);
    }

    /// どのセグメントサイズでも、並列篩の結果は基本篩と一致する。
    #[test]
    fn parallel_equals_base_sieve(n in 0u64..5_000, segment_size in 1u64..6_000) {
        let primes = multithreaded_segmented_primes(n, Some(segment_size)).unwrap();
        prop_assert_eq!(primes, sieve_primes(n).unwrap());
    }

    /// セグメント列は `[1, n]` を隙間なく順に覆う。
    #[test]
    fn partition_tiles_range(n in 0u64..100_000, segment_size in 1u64..10_000) {
        let segments = partition(n, segment_size).unwrap();
        let total: u64 = segments.iter().map(|s| s.len()).sum();
        prop_assert_eq!(total, n);
        if let Some(first) = segments.first() {
            prop_assert_eq!(first.start, 1);
        }
        if let Some(last) = segments.last() {
            prop_assert_eq!(last.end, n);
        }
        for w in segments.windows(2) {
            prop_assert_eq!(w[0].end + 1, w[1].start);
        }
    }

    /// Miller-Rabin と試し割りの判定は一致する。
    #[test]
    fn miller_rabin_agrees_with_trial_division(n in 0u64..200_000) {
        prop_assert_eq!(is_probable_prime(n), is_prime_trial_division(n));
    }
}

#[test]
fn verify_accepts_sieve_output() {
    let primes = sieve_primes(10_000).unwrap();
    let report = verify_primes(&primes, 100).unwrap();
    assert_eq!(report.count, 1_229);
    assert_eq!(report.checked_tail, 100);
    assert_eq!(report.min, Some(2));
    assert_eq!(report.max, Some(9_973));
}

#[test]
fn verify_rejects_bad_sequences() {
    assert!(verify_primes(&[2, 3, 3, 5], 0).is_err());
    assert!(verify_primes(&[2, 5, 3], 0).is_err());
    assert!(verify_primes(&[2, 3, 4], 0).is_err());
    assert!(verify_primes(&[2, 3, 9], 1).is_err());
    assert_eq!(verify_primes(&[], 10).unwrap().max, None);
}
