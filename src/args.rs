// src/args.rs
use clap::Parser;
use std::path::PathBuf;

/// 出力フォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "cstat",
    version,
    about = "C/C++ソースファイルの構造統計 (行数/ネスト深度/コメント比率)"
)]
pub struct Args {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// 行エコーを省略しファイル統計のみ表示
    #[arg(long)]
    pub summary_only: bool,

    /// 最初のエラーで中断する
    #[arg(long)]
    pub strict: bool,

    /// 対象ファイル
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}
