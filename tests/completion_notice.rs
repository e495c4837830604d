use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};
use sosu_bunkatsu::cpu_engine::multithreaded_segmented_primes;

/// ライブラリが出したログ行を溜めておくロガー（テスト専用）。
struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("sosu_bunkatsu") {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(format!("{}|{}", record.level(), record.args()));
            }
        }
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

fn done_count() -> usize {
    CAPTURE
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.as_str() == "INFO|done")
        .count()
}

/// 各セグメントの完了時に `done` がちょうど 1 回ずつ出ること。
///
/// グローバルロガーを差し替えるため、このファイルのテストはこれ 1 つにしておく。
#[test]
fn each_segment_emits_one_done_notice() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let primes = multithreaded_segmented_primes(30, Some(10)).unwrap();
    assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    assert_eq!(done_count(), 3);

    // 最後のセグメントが短い場合も数は変わらない
    multithreaded_segmented_primes(25, Some(10)).unwrap();
    assert_eq!(done_count(), 6);

    // n = 0 ではセグメントが無いので通知も無い
    multithreaded_segmented_primes(0, None).unwrap();
    assert_eq!(done_count(), 6);
}
