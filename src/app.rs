use crate::browser;
use crate::config::Config;
use crate::models::QuestionRecord;
use crate::parser::QuestionParser;
use crate::reconcile::{diff_stores, merge_batch};
use crate::report;
use crate::sources::{capture_result_items, BlockParser, TextDocumentSource};
use crate::store::{QuestionBank, RecordStore};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// diff 模式：两份文本独立解析，输出双向差集报告
    pub async fn run_diff(&self) -> Result<()> {
        log_diff_start(&self.config);

        let store_1 = self.parse_file(&self.config.diff_file_1)?;
        let store_2 = self.parse_file(&self.config.diff_file_2)?;

        let outcome = diff_stores(&store_1, &store_2);

        report::write_diff_report(
            Path::new(&self.config.diff_output_file),
            &self.config.diff_file_1,
            &self.config.diff_file_2,
            &outcome,
        )?;

        info!("仅在文件1有的题目数: {}", outcome.only_in_first.len());
        info!("仅在文件2有的题目数: {}", outcome.only_in_second.len());
        if outcome.is_identical() {
            info!("两份文件的题目完全一致");
        }
        Ok(())
    }

    fn parse_file(&self, path: &str) -> Result<RecordStore<QuestionRecord>> {
        let mut source = TextDocumentSource::open(Path::new(path))
            .with_context(|| format!("无法打开试题文本: {}", path))?;
        let mut parser = QuestionParser::new(&self.config)?;
        parser.parse_source(&mut source)
    }

    /// merge 模式：交互式抓取，批内查重后增量写回题库
    ///
    /// 每个批次处理到底（抓取 → 查重 → 有新增才落盘）再等下一次回车；
    /// 操作者随时输入 q 退出，未处理完的批次不会留下半截状态。
    pub async fn run_merge(&self) -> Result<()> {
        let bank_path = Path::new(&self.config.bank_csv_path);
        let mut bank = QuestionBank::load(bank_path, self.config.min_fingerprint_len)?;

        let (browser, _page) = browser::connect_to_browser(
            self.config.browser_debug_port,
            &self.config.target_url,
        )
        .await?;
        info!("🚀 浏览器已连接");

        let parser = BlockParser::new()?;
        log_merge_guide();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut batch_count = 1;

        loop {
            info!(
                "waiting... 请操作到【答案页面】后按回车 (输入 q 退出): "
            );
            let Some(line) = lines.next_line().await.context("读取标准输入失败")? else {
                break;
            };
            if line.trim().eq_ignore_ascii_case("q") {
                break;
            }

            info!("   ⚡️ 正在第 {} 次抓取...", batch_count);

            // 查看试卷会开新窗口，抓取前切到最新的标签页
            let page = browser::newest_page(&browser).await?;
            let rows = match capture_result_items(&page, &parser).await {
                Ok(rows) => rows,
                Err(e) => {
                    error!("   ❌ 抓取出错: {}", e);
                    continue;
                }
            };

            if rows.is_empty() {
                warn!("   ⚠️ 没找到题目，请确认你在【查看试卷】页面！");
                continue;
            }

            let outcome = merge_batch(&mut bank, rows);
            info!(
                "   ✅ 抓取成功！本轮【新增】: {} 题 | 题库总计: {} 题",
                outcome.inserted,
                bank.len()
            );

            // 只有有新题时才写文件，减少磁盘读写
            if outcome.needs_persist() {
                bank.save(bank_path)?;
            } else {
                info!("   💤 本页题目都已存在，无需更新文件");
            }

            log_next_step();
            batch_count += 1;
        }

        info!("程序结束。");
        Ok(())
    }
}

// ========== 日志辅助函数 ==========

fn log_diff_start(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试题比对模式");
    info!("文件1: {}", config.diff_file_1);
    info!("文件2: {}", config.diff_file_2);
    info!("{}", "=".repeat(60));
}

fn log_merge_guide() {
    info!("\n{}", "=".repeat(60));
    info!("📢 【交互模式 - 操作指南 (增量更新版)】");
    info!("1. 请手动登录 -> 进课程 -> 开始答题。");
    info!("2. 直接点【交卷】->【交卷】(不用做题)。");
    info!("3. 点【查看试卷】，直到看见带有正确答案的详情页。");
    info!("4. 回到这里按 【回车 (Enter)】，我开始智能抓取。");
    info!("{}\n", "=".repeat(60));
}

fn log_next_step() {
    info!("{}", "-".repeat(40));
    info!("👉 下一步：手动点【返回】->【再次作答】->【交卷】->【查看试卷】");
    info!("{}", "-".repeat(40));
}
