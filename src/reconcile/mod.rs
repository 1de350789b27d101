//! 对账算法：diff 模式的对称差集、merge 模式的增量合并
//!
//! 两种模式刻意使用不同的身份判定：diff 比较的是排版各异的
//! PDF 导出文本，用题干指纹；merge 抓取的是页面 DOM 里的干净文本，
//! 直接用题目原文。

pub mod diff;
pub mod merge;

pub use diff::{diff_stores, DiffOutcome};
pub use merge::{merge_batch, BatchOutcome};
