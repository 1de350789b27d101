//! # Question Diff Merge
//!
//! 题库比对与增量合并工具
//!
//! ## 两种运行模式
//!
//! - **diff 模式**：分别解析两份试题文本（从 PDF 导出的纯文本），
//!   以题干指纹为键建立两个题目集合，输出双向差集报告
//!   （"只在文件1中出现的题目" / "只在文件2中出现的题目"）。
//! - **merge 模式**：从 CSV 题库恢复历史题目，连接浏览器到答案页面，
//!   每按一次回车抓取一批题目，按题目原文查重后增量写回题库。
//!
//! ## 模块结构
//!
//! - `parser/` - 核心解析：行分类 → 题目组装 → 指纹归一化
//! - `store/` - 题目集合（指纹 → 题目）与 CSV 题库
//! - `reconcile/` - 差集与增量合并两种对账算法
//! - `sources/` - 输入协作方：文本文件页源、浏览器抓取源
//! - `browser/` - CDP 浏览器连接
//! - `report` - 差异报告输出
//! - `app` - 两种模式的流程编排

pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod parser;
pub mod reconcile;
pub mod report;
pub mod sources;
pub mod store;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{QuestionRecord, QuestionRow};
pub use parser::QuestionParser;
pub use reconcile::{diff_stores, merge_batch, BatchOutcome, DiffOutcome};
pub use store::{QuestionBank, RecordStore};
