use std::time::Instant;

use sosu_bunkatsu::cpu_engine::{default_pool_size, segmented_primes_with_pool};
use sosu_bunkatsu::logging::init_logger;

/// スレッド数を変えたときの分割篩の簡易ベンチマーク。
///
/// 使い方:
/// ```bash
/// cargo run --example bench_pool_sizes --release
/// ```
fn main() {
    init_logger();

    // 負荷と所要時間のバランスを見て適宜変更してください。
    let n = 10_000_000u64;
    let segment_size = n / 64;

    let max_pool = default_pool_size();
    let mut pool_sizes = vec![1usize];
    while let Some(&last) = pool_sizes.last() {
        if last * 2 > max_pool {
            break;
        }
        pool_sizes.push(last * 2);
    }
    if pool_sizes.last() != Some(&max_pool) {
        pool_sizes.push(max_pool);
    }

    println!("=== segmented sieve benchmark: n = {n}, segment_size = {segment_size} ===");
    for pool in pool_sizes {
        let start = Instant::now();
        match segmented_primes_with_pool(n, Some(segment_size), Some(pool)) {
            Ok(primes) => {
                println!(
                    "  pool = {pool:2}: {} primes  (elapsed: {:.3?})",
                    primes.len(),
                    start.elapsed()
                );
            }
            Err(e) => {
                println!("  pool = {pool:2}: error: {e}");
            }
        }
    }
}
