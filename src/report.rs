use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::engine_types::{PrimeResult, RunOutcome};

/// ベンチマーク 1 回分のレポート
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunReport {
    pub prime_max: u64,
    pub segment_size: u64,
    pub segment_count: usize,
    pub pool_size: usize,
    pub count: u64,
    pub last_prime: Option<u64>,
    pub execution_time_ms: u64,
    pub generated_at: String,
    pub tool_version: String,
}

impl RunReport {
    /// 実行結果からレポートを作る。生成時刻はローカル時刻。
    pub fn new(prime_max: u64, outcome: &RunOutcome) -> Self {
        Self {
            prime_max,
            segment_size: outcome.segment_size,
            segment_count: outcome.segment_count,
            pool_size: outcome.pool_size,
            count: outcome.primes.len() as u64,
            last_prime: outcome.primes.last().copied(),
            execution_time_ms: outcome.elapsed_ms,
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn to_json(&self) -> PrimeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 経過時間（秒）。
    pub fn elapsed_secs(&self) -> f64 {
        self.execution_time_ms as f64 / 1000.0
    }
}
