use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::engine_types::PrimeResult;

/// ベンチマーク実行の設定。
///
/// `settings.toml` に書かれていない項目は既定値になる。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 篩う上限 N（`[1, N]` の素数を求める）。
    pub prime_max: u64,
    /// セグメントサイズ。0 のときは `prime_max / 10`（約 10 分割）。
    pub segment_size: u64,
    /// ワーカースレッド数。0 のときは利用可能なコア数。セグメント数より多くはしない。
    pub pool_size: usize,
    /// メモリ推定値がシステムメモリの何%を超えたら警告するか (10.0 ~ 90.0)
    pub memory_usage_percent: f64,
    /// 結果の末尾何件を Miller-Rabin で検証するか。0 で検証しない。
    pub verify_tail: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prime_max: 100_000_000,
            segment_size: 0,
            pool_size: 0,
            memory_usage_percent: 50.0,
            verify_tail: 0,
        }
    }
}

impl Config {
    /// `segment_size` 設定を並列篩に渡す形に変換する（0 は「既定値」）。
    pub fn segment_size_hint(&self) -> Option<u64> {
        (self.segment_size > 0).then_some(self.segment_size)
    }

    /// `pool_size` 設定を並列篩に渡す形に変換する（0 は「既定値」）。
    pub fn pool_size_hint(&self) -> Option<usize> {
        (self.pool_size > 0).then_some(self.pool_size)
    }
}

pub const SETTINGS_FILE: &str = "settings.toml";

pub fn parse_config(contents: &str) -> PrimeResult<Config> {
    let cfg = toml::from_str(contents)?;
    Ok(cfg)
}

/// `path` の TOML 設定を読み込む。ファイルが無ければ既定値を返す（ファイルは作らない）。
pub fn load_config<P: AsRef<Path>>(path: P) -> PrimeResult<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Config::default());
    }
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    parse_config(&contents).map_err(|e| format!("failed to parse {}: {e}", path.display()).into())
}

pub fn to_toml_string(cfg: &Config) -> PrimeResult<String> {
    Ok(toml::to_string_pretty(cfg)?)
}
