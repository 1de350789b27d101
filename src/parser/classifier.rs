use crate::config::Config;
use anyhow::{Context, Result};
use regex::Regex;

/// 单行的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// 噪声行：页眉页脚、答案区域，不参与组装
    Noise,
    /// 新题目的开头：题号 + 首行剩余内容
    RecordStart { ordinal: u32, remainder: String },
    /// 当前题目的延续行（多行题干或选项）
    Continuation,
}

/// 行分类器
///
/// 逐行判断：噪声 / 新题开头 / 延续行。命中答案区域标记后，
/// 本页后续所有行都视为噪声（假设答案区域是文档的尾部，
/// 答案与题目逐页穿插的文档会丢失该页剩余内容，这是已知限制）。
pub struct LineClassifier {
    noise_markers: Vec<String>,
    answer_markers: Vec<String>,
    /// 题号后剩余内容须严格超过该长度才算新题开头，
    /// 防止把答案列表里的 "1. A" 误判成题目
    min_stem_len: usize,
    start_re: Regex,
    in_answer_section: bool,
}

impl LineClassifier {
    pub fn new(config: &Config) -> Result<Self> {
        let start_re = Regex::new(r"^(\d+)\.\s*(.*)").context("题目开头正则编译失败")?;
        Ok(Self {
            noise_markers: config.noise_markers.clone(),
            answer_markers: config.answer_markers.clone(),
            min_stem_len: config.min_fingerprint_len,
            start_re,
            in_answer_section: false,
        })
    }

    /// 翻页时重置答案区域标记
    pub fn reset_page(&mut self) {
        self.in_answer_section = false;
    }

    /// 分类一行原始文本
    ///
    /// 先去首尾空白；空行返回 `None`，不进入三种分类。
    pub fn classify(&mut self, raw: &str) -> Option<LineClass> {
        let line = raw.trim();
        if line.is_empty() {
            return None;
        }

        if self.in_answer_section {
            return Some(LineClass::Noise);
        }

        if self.answer_markers.iter().any(|m| line.contains(m.as_str())) {
            self.in_answer_section = true;
            return Some(LineClass::Noise);
        }

        if self.noise_markers.iter().any(|m| line.contains(m.as_str())) {
            return Some(LineClass::Noise);
        }

        if let Some(caps) = self.start_re.captures(line) {
            let remainder = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            if remainder.chars().count() > self.min_stem_len {
                // 题号解析失败时退回延续行（静默启发式，不报错）
                if let Ok(ordinal) = caps[1].parse::<u32>() {
                    return Some(LineClass::RecordStart {
                        ordinal,
                        remainder: remainder.to_string(),
                    });
                }
            }
        }

        Some(LineClass::Continuation)
    }
}
