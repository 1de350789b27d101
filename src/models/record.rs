use serde::{Deserialize, Serialize};

/// 一道完整组装的题目
///
/// `stem` 是第一个选项标记（如 "A."）之前的题干部分，作为身份依据；
/// 找不到选项标记时题干即全文。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 题目开头的编号（仅供展示，不参与身份比较）
    pub ordinal: u32,
    /// 原文各行（题干 + 选项，保持原顺序）
    pub body: Vec<String>,
    /// 题干（第一个选项标记之前的部分）
    pub stem: String,
}

impl QuestionRecord {
    /// 题目原文（各行以换行拼接）
    pub fn full_text(&self) -> String {
        self.body.join("\n")
    }
}
