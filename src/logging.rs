use env_logger::{Builder, Env};

/// `RUST_LOG` が未設定なら `info` を既定レベルにしたロガービルダー。
///
/// 各ワーカーの完了通知（`done`）は `info` で出るため、既定で見えるようにしておく。
pub fn logger_builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or("info"))
}

/// バイナリ・デモ共通のロガー初期化。
pub fn init_logger() {
    logger_builder().init();
}
