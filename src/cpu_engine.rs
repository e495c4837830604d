use std::time::Instant;

use rayon::prelude::*;

use crate::config::Config;
use crate::engine_types::{PrimeResult, RunOutcome, Segment};
use crate::memory;

/// `segment_size` 未指定時の既定値。`n / 10`（約 10 セグメント）で、最小 1。
pub fn default_segment_size(n: u64) -> u64 {
    (n / 10).max(1)
}

/// `pool_size` 未指定時の既定値。利用可能なコア数。
pub fn default_pool_size() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or_else(|_| rayon::current_num_threads())
}

/// `[1, n]` を `segment_size` ごとの連続セグメントに分割する。
///
/// - 開始位置は `1, 1 + s, 1 + 2s, ...`（`n` 以下）、終了位置は `min(start + s - 1, n)`。
/// - 最後のセグメントだけ短くなることがある。`n == 0` なら空。
pub fn partition(n: u64, segment_size: u64) -> PrimeResult<Vec<Segment>> {
    if segment_size == 0 {
        return Err("segment_size must be > 0".into());
    }

    let count = n.div_ceil(segment_size);
    let count = usize::try_from(count)
        .map_err(|e| format!("{count} segments do not fit in memory: {e}"))?;
    let mut segments = Vec::new();
    segments
        .try_reserve_exact(count)
        .map_err(|e| format!("cannot allocate {count} segment descriptors: {e}"))?;
    let mut seg_start = 1u64;
    while seg_start <= n {
        let seg_end = seg_start.saturating_add(segment_size - 1).min(n);
        segments.push(Segment::new(seg_start, seg_end));
        match seg_end.checked_add(1) {
            Some(next) => seg_start = next,
            None => break,
        }
    }
    Ok(segments)
}

/// `[1, n]` の素数を分割篩で並列に求める。スレッド数は利用可能なコア数。
///
/// `segment_size` が None のときは `n / 10`。
pub fn multithreaded_segmented_primes(n: u64, segment_size: Option<u64>) -> PrimeResult<Vec<u64>> {
    segmented_primes_with_pool(n, segment_size, None)
}

/// スレッド数も指定できる版。`pool_size` が None のときは利用可能なコア数。
pub fn segmented_primes_with_pool(
    n: u64,
    segment_size: Option<u64>,
    pool_size: Option<usize>,
) -> PrimeResult<Vec<u64>> {
    let plan = plan_run(n, segment_size, pool_size)?;
    run_segments(&plan.segments, plan.workers)
}

/// 分割結果と実際に使うスレッド数。
struct RunPlan {
    segment_size: u64,
    segments: Vec<Segment>,
    workers: usize,
}

/// 既定値を補って `[1, n]` を分割し、スレッド数を決める。
fn plan_run(n: u64, segment_size: Option<u64>, pool_size: Option<usize>) -> PrimeResult<RunPlan> {
    let segment_size = segment_size.unwrap_or_else(|| default_segment_size(n));
    let segments = partition(n, segment_size)?;
    let workers = effective_pool_size(pool_size, segments.len());
    Ok(RunPlan {
        segment_size,
        segments,
        workers,
    })
}

/// 設定に従って篩を 1 回実行し、素数と実行統計を返す。
///
/// 経過時間はスレッドプール構築から篩・マージ完了までで、分割とメモリ見積もりは含まない
/// （1 回のみ計測、ウォームアップなし）。
pub fn generate_primes(cfg: &Config) -> PrimeResult<RunOutcome> {
    let n = cfg.prime_max;
    let RunPlan {
        segment_size,
        segments,
        workers,
    } = plan_run(n, cfg.segment_size_hint(), cfg.pool_size_hint())?;

    log::info!(
        "Sieving [1, {}]: {} segments of size {}, {} worker threads",
        n,
        segments.len(),
        segment_size,
        workers
    );

    let mem_info =
        memory::estimate_run_memory(n, segment_size, workers, cfg.memory_usage_percent);
    log::info!("{}", mem_info.format());
    if !mem_info.within_budget {
        log::warn!(
            "Estimated peak memory exceeds {:.0}% of system memory; consider a smaller segment_size or pool_size",
            cfg.memory_usage_percent.clamp(10.0, 90.0)
        );
    }

    let start_time = Instant::now();
    let primes = run_segments(&segments, workers)?;
    let elapsed_ms = start_time.elapsed().as_millis() as u64;

    log::info!("All segments completed: {} primes", primes.len());

    Ok(RunOutcome {
        primes,
        segment_size,
        segment_count: segments.len(),
        pool_size: workers,
        elapsed_ms,
    })
}

/// 実際に使うスレッド数。`min(セグメント数, 指定値 or コア数)` で、最小 1。
fn effective_pool_size(requested: Option<usize>, segment_count: usize) -> usize {
    requested
        .unwrap_or_else(default_pool_size)
        .min(segment_count)
        .max(1)
}

/// 各セグメントを `workers` スレッドのプールで篩い、セグメント順に連結する。
///
/// `par_iter().map().collect()` は完了順ではなく元のインデックス順に結果を並べるので、
/// どのワーカーが先に終わっても出力は昇順になる。どれか 1 つでも失敗すれば全体をエラーにする。
fn run_segments(segments: &[Segment], workers: usize) -> PrimeResult<Vec<u64>> {
    if segments.is_empty() {
        return Ok(Vec::new());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("segment-worker-{i}"))
        .build()?;

    let results: Vec<Vec<u64>> = pool.install(|| {
        segments
            .par_iter()
            .map(sieve_one_segment)
            .collect::<PrimeResult<Vec<_>>>()
    })?;

    let total: usize = results.iter().map(Vec::len).sum();
    let mut primes = Vec::with_capacity(total);
    for ps in results {
        primes.extend(ps);
    }
    Ok(primes)
}

fn sieve_one_segment(segment: &Segment) -> PrimeResult<Vec<u64>> {
    let primes = segment.primes()?;
    log::debug!(
        "Segment [{}, {}]: {} primes",
        segment.start,
        segment.end,
        primes.len()
    );
    log::info!("done");
    Ok(primes)
}
