use serde::{Deserialize, Serialize};

/// 选项列标签（题库 CSV 列顺序）
pub const OPTION_LABELS: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

/// 题库中的一行：题目、答案、最多七个选项
///
/// 字段名即 CSV 表头。选项列缺省为空字符串，序列化时保持完整列布局。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionRow {
    #[serde(rename = "题目")]
    pub question: String,
    #[serde(rename = "答案", default)]
    pub answer: String,
    #[serde(rename = "A", default)]
    pub option_a: String,
    #[serde(rename = "B", default)]
    pub option_b: String,
    #[serde(rename = "C", default)]
    pub option_c: String,
    #[serde(rename = "D", default)]
    pub option_d: String,
    #[serde(rename = "E", default)]
    pub option_e: String,
    #[serde(rename = "F", default)]
    pub option_f: String,
    #[serde(rename = "G", default)]
    pub option_g: String,
}

impl QuestionRow {
    /// 由抓取结果构造一行，多余的选项截断，缺少的留空
    pub fn from_capture(question: String, answer: String, options: &[String]) -> Self {
        let mut row = Self {
            question,
            answer,
            ..Default::default()
        };
        // zip 自然截断到 G 为止
        let slots = [
            &mut row.option_a,
            &mut row.option_b,
            &mut row.option_c,
            &mut row.option_d,
            &mut row.option_e,
            &mut row.option_f,
            &mut row.option_g,
        ];
        for (slot, text) in slots.into_iter().zip(options.iter()) {
            *slot = text.clone();
        }
        row
    }

    /// 按 A-G 顺序返回非空选项
    pub fn options(&self) -> Vec<&str> {
        [
            &self.option_a,
            &self.option_b,
            &self.option_c,
            &self.option_d,
            &self.option_e,
            &self.option_f,
            &self.option_g,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_capture_fills_options_in_order() {
        let options: Vec<String> = ["甲", "乙", "丙"].iter().map(|s| s.to_string()).collect();
        let row = QuestionRow::from_capture("题目一".to_string(), "A".to_string(), &options);
        assert_eq!(row.option_a, "甲");
        assert_eq!(row.option_c, "丙");
        assert_eq!(row.option_d, "");
        assert_eq!(row.options(), vec!["甲", "乙", "丙"]);
    }

    #[test]
    fn from_capture_truncates_past_seven_options() {
        let options: Vec<String> = (1..=9).map(|i| format!("选项{}", i)).collect();
        let row = QuestionRow::from_capture("题目二".to_string(), "B".to_string(), &options);
        assert_eq!(row.option_g, "选项7");
        assert_eq!(row.options().len(), 7);
    }
}
