use sysinfo::System;

use crate::sieve_math::integer_sqrt;

/// システムの物理メモリ総量を取得（バイト単位）
pub fn get_total_memory() -> u64 {
    let mut sys = System::new();
    sys.refresh_memory();
    sys.total_memory()
}

/// セグメント 1 つを篩うときのメモリ使用量を推定（バイト単位）
///
/// - マーカー配列: 1 数値 1 ビット
/// - 種素数: `sqrt(end)` までの篩のマーカー配列と、素数列（`u64`）。素数の個数は x / ln x で見積もる
/// - Vec のオーバーヘッド等を考慮して 1.2 倍
pub fn estimate_segment_memory(segment_size: u64, end: u64) -> u64 {
    let marker_bytes = segment_size.div_ceil(8);
    let root = integer_sqrt(end) + 1;
    let root_marker_bytes = (root + 1).div_ceil(8);
    let root_prime_count = if root < 3 {
        1.0
    } else {
        root as f64 / (root as f64).ln()
    };
    let seed_bytes = (root_prime_count * 8.0) as u64;
    ((marker_bytes + root_marker_bytes + seed_bytes) as f64 * 1.2) as u64
}

/// 並列実行 1 回分のピークメモリを推定する。
///
/// 同時に走るのは最大 `pool_size` 個のセグメントなので、
/// 最も重い（最後の）セグメントの推定値 × スレッド数を上限とみなす。
pub fn estimate_run_memory(
    prime_max: u64,
    segment_size: u64,
    pool_size: usize,
    memory_usage_percent: f64,
) -> MemoryInfo {
    let total_memory = get_total_memory();
    let segment_memory = estimate_segment_memory(segment_size.min(prime_max), prime_max);
    let estimated_total = segment_memory.saturating_mul(pool_size.max(1) as u64);
    let usage_percent = if total_memory == 0 {
        0.0
    } else {
        (estimated_total as f64 / total_memory as f64) * 100.0
    };
    let percent = memory_usage_percent.clamp(10.0, 90.0);

    MemoryInfo {
        total_memory,
        segment_memory,
        estimated_total,
        usage_percent,
        within_budget: total_memory == 0 || usage_percent <= percent,
    }
}

#[derive(Debug, Clone)]
pub struct MemoryInfo {
    pub total_memory: u64,
    pub segment_memory: u64,
    pub estimated_total: u64,
    pub usage_percent: f64,
    /// 推定使用量が設定したメモリ使用率の上限以内か。総量が取れない環境では true。
    pub within_budget: bool,
}

impl MemoryInfo {
    pub fn format(&self) -> String {
        format!(
            "Memory: system {:.1}GB, per segment {:.1}MB, estimated peak {:.1}MB ({:.1}%)",
            self.total_memory as f64 / (1024.0 * 1024.0 * 1024.0),
            self.segment_memory as f64 / (1024.0 * 1024.0),
            self.estimated_total as f64 / (1024.0 * 1024.0),
            self.usage_percent
        )
    }
}
