use crate::models::QuestionRecord;
use crate::parser::classifier::LineClass;
use anyhow::{Context, Result};
use regex::Regex;

/// 组装状态
enum AssemblerState {
    /// 尚未遇到第一道题
    Idle,
    /// 正在累积一道题
    Accumulating { ordinal: u32, body: Vec<String> },
}

/// 题目组装器
///
/// 小状态机：`Idle` / `Accumulating`。新题开头会先产出上一道题；
/// 噪声行不影响状态；归属不明的行（第一道题之前的延续行）直接丢弃。
pub struct RecordAssembler {
    state: AssemblerState,
    option_re: Regex,
}

impl RecordAssembler {
    pub fn new() -> Result<Self> {
        let option_re = Regex::new(r"[A-Z]\.").context("选项标记正则编译失败")?;
        Ok(Self {
            state: AssemblerState::Idle,
            option_re,
        })
    }

    /// 推入一条已分类的行，新题开头会产出已完成的上一道题
    ///
    /// `line` 是去过首尾空白的原始行，整行（含题号）进入题目原文。
    pub fn push(&mut self, class: &LineClass, line: &str) -> Option<QuestionRecord> {
        match class {
            LineClass::Noise => None,
            LineClass::RecordStart { ordinal, .. } => {
                let finished = self.take_current();
                self.state = AssemblerState::Accumulating {
                    ordinal: *ordinal,
                    body: vec![line.to_string()],
                };
                finished
            }
            LineClass::Continuation => {
                if let AssemblerState::Accumulating { body, .. } = &mut self.state {
                    body.push(line.to_string());
                }
                None
            }
        }
    }

    /// 输入结束，产出仍在累积中的最后一道题
    pub fn finish(&mut self) -> Option<QuestionRecord> {
        self.take_current()
    }

    fn take_current(&mut self) -> Option<QuestionRecord> {
        match std::mem::replace(&mut self.state, AssemblerState::Idle) {
            AssemblerState::Idle => None,
            AssemblerState::Accumulating { ordinal, body } => {
                Some(self.finalize(ordinal, body))
            }
        }
    }

    /// 定稿：拼接全文，第一个选项标记之前的部分是题干
    fn finalize(&self, ordinal: u32, body: Vec<String>) -> QuestionRecord {
        let full_text = body.join("\n");
        let stem = match self.option_re.find(&full_text) {
            Some(m) => full_text[..m.start()].to_string(),
            None => full_text,
        };
        QuestionRecord { ordinal, body, stem }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(ordinal: u32, remainder: &str) -> LineClass {
        LineClass::RecordStart {
            ordinal,
            remainder: remainder.to_string(),
        }
    }

    #[test]
    fn assembles_record_with_stem_before_first_option() {
        let mut a = RecordAssembler::new().expect("组装器构造失败");
        assert!(a
            .push(&start(1, "统战工作的性质是什么"), "1. 统战工作的性质是什么")
            .is_none());
        assert!(a.push(&LineClass::Continuation, "A. 经济工作").is_none());
        assert!(a.push(&LineClass::Continuation, "B. 政治工作").is_none());

        let record = a.finish().expect("应产出一道题");
        assert_eq!(record.ordinal, 1);
        assert_eq!(record.body.len(), 3);
        assert_eq!(record.stem, "1. 统战工作的性质是什么\n");
    }

    #[test]
    fn new_start_emits_previous_record() {
        let mut a = RecordAssembler::new().expect("组装器构造失败");
        a.push(&start(1, "第一道题的题干内容"), "1. 第一道题的题干内容");
        let first = a.push(&start(2, "第二道题的题干内容"), "2. 第二道题的题干内容");
        assert_eq!(first.expect("第一道题应定稿").ordinal, 1);

        let second = a.finish().expect("第二道题应定稿");
        assert_eq!(second.ordinal, 2);
        assert_eq!(second.stem, "2. 第二道题的题干内容");
    }

    #[test]
    fn stem_equals_body_without_option_marker() {
        let mut a = RecordAssembler::new().expect("组装器构造失败");
        a.push(&start(3, "没有选项的简答题题干"), "3. 没有选项的简答题题干");
        a.push(&LineClass::Continuation, "第二行题干");
        let record = a.finish().expect("应产出一道题");
        assert_eq!(record.stem, "3. 没有选项的简答题题干\n第二行题干");
    }

    #[test]
    fn continuation_before_first_record_is_discarded() {
        let mut a = RecordAssembler::new().expect("组装器构造失败");
        assert!(a.push(&LineClass::Continuation, "孤立的行").is_none());
        assert!(a.finish().is_none());
    }

    #[test]
    fn noise_does_not_touch_accumulation() {
        let mut a = RecordAssembler::new().expect("组装器构造失败");
        a.push(&start(4, "被页脚打断的题干内容"), "4. 被页脚打断的题干内容");
        a.push(&LineClass::Noise, "PAGE 2");
        a.push(&LineClass::Continuation, "A. 选项");
        let record = a.finish().expect("应产出一道题");
        assert_eq!(record.body, vec!["4. 被页脚打断的题干内容", "A. 选项"]);
    }
}
