//! 差异报告输出
//!
//! 报告排版属于本模块，核心只提供两个差集序列。

use crate::error::{AppError, AppResult};
use crate::reconcile::DiffOutcome;
use crate::models::QuestionRecord;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

/// 把双向差集写成文本报告
pub fn write_diff_report(
    path: &Path,
    file_1: &str,
    file_2: &str,
    outcome: &DiffOutcome,
) -> AppResult<()> {
    let content = render_report(file_1, file_2, outcome);
    std::fs::write(path, content)
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;
    info!("对比完成！结果已保存至: {}", path.display());
    Ok(())
}

fn render_report(file_1: &str, file_2: &str, outcome: &DiffOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== 对比报告 ===");
    let _ = writeln!(out, "生成时间: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "文件1: {}", file_1);
    let _ = writeln!(out, "文件2: {}\n", file_2);

    render_section(&mut out, "文件1", &outcome.only_in_first);
    out.push_str("\n\n");
    render_section(&mut out, "文件2", &outcome.only_in_second);

    out
}

fn render_section(out: &mut String, label: &str, records: &[QuestionRecord]) {
    let _ = writeln!(
        out,
        "【仅在 {} 中出现的题目】 (共 {} 题):",
        label,
        records.len()
    );
    let _ = writeln!(out, "{}", "=".repeat(50));
    for (i, record) in records.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", i + 1, record.full_text());
        let _ = writeln!(out, "{}", "-".repeat(30));
    }
}
