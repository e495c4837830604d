//! 分割の様子を小さな範囲で確認するプログラム（CLI専用）
use sosu_bunkatsu::cpu_engine::{multithreaded_segmented_primes, partition};
use sosu_bunkatsu::logging::init_logger;
use sosu_bunkatsu::sieve_math::sieve_primes;

fn main() {
    init_logger();

    let n = 100u64;
    let segment_size = 30u64;

    println!("========================================");
    println!("Range: 1..={n}, segment_size = {segment_size}");
    println!("Expected prime count: 25");
    println!("========================================");

    let segments = match partition(n, segment_size) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    for seg in &segments {
        match seg.primes() {
            Ok(primes) => println!("[{:3}, {:3}] -> {:?}", seg.start, seg.end, primes),
            Err(e) => eprintln!("[{:3}, {:3}] -> error: {e}", seg.start, seg.end),
        }
    }

    let merged = match multithreaded_segmented_primes(n, Some(segment_size)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };
    let reference = sieve_primes(n).unwrap_or_default();

    println!("Merged: {} primes", merged.len());
    if merged == reference {
        println!("OK: matches the non-segmented sieve");
    } else {
        println!("MISMATCH: non-segmented sieve gives {:?}", reference);
    }
}
