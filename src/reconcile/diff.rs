use crate::models::QuestionRecord;
use crate::store::RecordStore;

/// 双向差集结果
#[derive(Debug)]
pub struct DiffOutcome {
    /// 只在第一个集合中出现的题目（按其插入顺序）
    pub only_in_first: Vec<QuestionRecord>,
    /// 只在第二个集合中出现的题目
    pub only_in_second: Vec<QuestionRecord>,
}

impl DiffOutcome {
    pub fn is_identical(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }
}

/// 对称差集：两个集合都不被修改
pub fn diff_stores(
    first: &RecordStore<QuestionRecord>,
    second: &RecordStore<QuestionRecord>,
) -> DiffOutcome {
    DiffOutcome {
        only_in_first: first.difference(second).into_iter().cloned().collect(),
        only_in_second: second.difference(first).into_iter().cloned().collect(),
    }
}
