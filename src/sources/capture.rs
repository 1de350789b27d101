use crate::error::AppResult;
use crate::models::QuestionRow;
use anyhow::{Context, Result};
use chromiumoxide::Page;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

/// 从答案页面收集题目块的脚本
///
/// 题目取 `.item-body h4`；选项优先 `.radioText`/`.checkboxText`，
/// 取不到时回退 element-ui 的 label 类；整块文本留给答案提取用。
const CAPTURE_SCRIPT: &str = r#"
(() => {
    const blocks = Array.from(document.querySelectorAll('.result_item'));
    return blocks.map(block => {
        const head = block.querySelector('.item-body h4');
        let options = Array.from(block.querySelectorAll('.radioText, .checkboxText'))
            .map(el => el.innerText.trim())
            .filter(text => text);
        if (options.length === 0) {
            options = Array.from(block.querySelectorAll('.el-radio__label, .el-checkbox__label'))
                .map(el => el.innerText.trim())
                .filter(text => text);
        }
        return {
            question: head ? head.innerText.trim() : '',
            options: options,
            full_text: block.innerText
        };
    });
})()
"#;

/// 页面上抓到的一个题目块（脚本返回的原始形态）
#[derive(Debug, Clone, Deserialize)]
pub struct CapturedBlock {
    pub question: String,
    pub options: Vec<String>,
    pub full_text: String,
}

/// 把抓取到的原始块解析成题库行
pub struct BlockParser {
    answer_re: Regex,
}

impl BlockParser {
    pub fn new() -> Result<Self> {
        let answer_re =
            Regex::new(r"正确答案[：:]\s*([A-Za-z\s,，]+)").context("答案正则编译失败")?;
        Ok(Self { answer_re })
    }

    /// 题目为空的块无法入库，返回 `None`
    pub fn parse(&self, block: CapturedBlock) -> Option<QuestionRow> {
        let question = block.question.trim().to_string();
        if question.is_empty() {
            return None;
        }
        let answer = self.extract_answer(&block.full_text);
        Some(QuestionRow::from_capture(question, answer, &block.options))
    }

    /// 从整块文本提取 "正确答案: X" 的字母部分，找不到记为 "未知"
    fn extract_answer(&self, full_text: &str) -> String {
        match self.answer_re.captures(full_text) {
            Some(caps) => {
                let cleaned: String = caps[1]
                    .chars()
                    .filter(|c| c.is_ascii_alphabetic())
                    .collect();
                if cleaned.is_empty() {
                    "未知".to_string()
                } else {
                    cleaned
                }
            }
            None => "未知".to_string(),
        }
    }
}

/// 在当前页面执行抓取脚本，返回解析好的题库行
pub async fn capture_result_items(page: &Page, parser: &BlockParser) -> AppResult<Vec<QuestionRow>> {
    let blocks: Vec<CapturedBlock> = page.evaluate(CAPTURE_SCRIPT).await?.into_value()?;
    debug!("页面上共 {} 个题目块", blocks.len());

    Ok(blocks
        .into_iter()
        .filter_map(|block| parser.parse(block))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> BlockParser {
        BlockParser::new().expect("解析器构造失败")
    }

    fn block(question: &str, options: &[&str], full_text: &str) -> CapturedBlock {
        CapturedBlock {
            question: question.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            full_text: full_text.to_string(),
        }
    }

    #[test]
    fn parses_single_choice_block() {
        let row = parser()
            .parse(block(
                "统战工作的性质是什么",
                &["经济工作", "政治工作"],
                "统战工作的性质是什么\n经济工作\n政治工作\n正确答案：B",
            ))
            .expect("应解析出一行");

        assert_eq!(row.question, "统战工作的性质是什么");
        assert_eq!(row.answer, "B");
        assert_eq!(row.options(), vec!["经济工作", "政治工作"]);
    }

    #[test]
    fn multi_choice_answer_is_cleaned() {
        let row = parser()
            .parse(block(
                "多选题的题目内容",
                &["甲", "乙", "丙"],
                "……\n正确答案: A, B,C\n……",
            ))
            .expect("应解析出一行");
        assert_eq!(row.answer, "ABC");
    }

    #[test]
    fn missing_answer_marker_defaults_to_unknown() {
        let row = parser()
            .parse(block("没有答案标记的题目", &[], "没有答案标记的题目"))
            .expect("应解析出一行");
        assert_eq!(row.answer, "未知");
    }

    #[test]
    fn half_width_colon_is_accepted() {
        let row = parser()
            .parse(block("题目内容", &[], "正确答案: D"))
            .expect("应解析出一行");
        assert_eq!(row.answer, "D");
    }

    #[test]
    fn empty_question_block_is_dropped() {
        assert!(parser().parse(block("  ", &["甲"], "正确答案：A")).is_none());
    }
}
