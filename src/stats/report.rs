// src/stats/report.rs
use serde::Serialize;
use std::path::PathBuf;

/// ファイル単位の統計レポート
///
/// Assembled by the engine from the collectors once the scan has finished;
/// this is what the JSON renderer serializes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub lines: usize,
    pub max_paren_nesting: i64,
    pub max_brace_nesting: i64,
    pub blank_lines: usize,
    pub comment_only_lines: usize,
    pub code_only_lines: usize,
    pub code_and_comment_lines: usize,
    pub comment_to_code_ratio: f64,
}
