use crate::models::QuestionRow;
use crate::store::QuestionBank;
use tracing::debug;

/// 单批合并的结果
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// 本批新增的题目数
    pub inserted: usize,
    /// 本批抓取到的题目总数（含重复）
    pub total: usize,
}

impl BatchOutcome {
    /// 仅当本批有新增时才需要写回磁盘
    pub fn needs_persist(&self) -> bool {
        self.inserted > 0
    }
}

/// 把一批抓取到的题目增量并入题库
///
/// 查重键是题目原文（去首尾空白）：无论题目是历史加载的
/// 还是本批前面刚插入的，重复都跳过。对同一批重复执行
/// 不会再产生任何插入（单调性）。
pub fn merge_batch(bank: &mut QuestionBank, rows: Vec<QuestionRow>) -> BatchOutcome {
    let mut outcome = BatchOutcome {
        inserted: 0,
        total: rows.len(),
    };

    for row in rows {
        if bank.insert_if_new(row) {
            outcome.inserted += 1;
        } else {
            debug!("跳过已存在的题目");
        }
    }

    outcome
}
