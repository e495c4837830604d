use std::error::Error;

// 篩エンジン（基本篩 / セグメント篩 / 並列コーディネータ）で共有する型の定義。

/// エンジン共通の結果型。
///
/// - セグメントの計算はワーカースレッド上で行われるため、エラーは `Send + Sync` な Box で包みます。
/// - どれか 1 つのセグメントでエラーが起きた場合、その実行全体がこのエラーで終了します。
pub type PrimeResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// 篩う対象の連続区間 `[start, end]`（両端を含む）。
///
/// `cpu_engine::partition` が生成するセグメント列は `[1, n]` を隙間・重複なく覆います。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: u64,
    pub end: u64,
}

impl Segment {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// 区間に含まれる整数の個数。`start > end` の場合は 0。
    pub fn len(&self) -> u64 {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 並列篩 1 回分の実行結果。
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// `[1, n]` の素数（昇順）。
    pub primes: Vec<u64>,
    /// 実際に使ったセグメントサイズ。
    pub segment_size: u64,
    /// セグメント数。
    pub segment_count: usize,
    /// ワーカースレッド数。
    pub pool_size: usize,
    /// 分割からマージ完了までの経過時間（ミリ秒）。
    pub elapsed_ms: u64,
}
