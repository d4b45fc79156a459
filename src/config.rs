//! コマンドライン引数

use clap::Parser;

/// 接続中のマイクを番号または名前で検索する
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct CliArgs {
    /// 検索するマイクの番号 (指定時は --name より優先)
    #[arg(long, short = 'i')]
    pub index: Option<usize>,

    /// マイク名の一部 (大文字小文字を区別しない)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// 使用するオーディオホスト (ALSA, JACK, WASAPI など)
    #[arg(long, env = "MIC_FINDER_HOST")]
    pub host: Option<String>,

    /// 結果を JSON で出力する
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// ログレベル (RUST_LOG があればそちらを優先)
    #[arg(long = "log-level", env = "MIC_FINDER_LOG", default_value = "warn")]
    pub log_level: String,
}

/// 入力デバイスを一覧表示する
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct ListArgs {
    /// 使用するオーディオホスト (ALSA, JACK, WASAPI など)
    #[arg(long, env = "MIC_FINDER_HOST")]
    pub host: Option<String>,

    /// ログレベル (RUST_LOG があればそちらを優先)
    #[arg(long = "log-level", env = "MIC_FINDER_LOG", default_value = "warn")]
    pub log_level: String,
}
