use anyhow::{Context, Result};
use regex::Regex;

/// 指纹归一化器
///
/// 把题干投影成规范的身份字符串：去掉开头的 "1. "、"102." 等编号，
/// 再删除所有非中文、非英文字母、非数字的字符（忽略标点与空白差异）。
/// 两道题的指纹相等即视为同一道题。
pub struct FingerprintNormalizer {
    enumeration_re: Regex,
}

impl FingerprintNormalizer {
    pub fn new() -> Result<Self> {
        let enumeration_re = Regex::new(r"^\d+\.\s*").context("编号正则编译失败")?;
        Ok(Self { enumeration_re })
    }

    /// 纯函数：题干 → 指纹。确定性且幂等。
    pub fn normalize(&self, stem: &str) -> String {
        let stripped = self.enumeration_re.replace(stem, "");
        stripped.chars().filter(|c| is_identity_char(*c)).collect()
    }
}

/// 指纹保留的字符：CJK 统一表意文字、ASCII 字母、ASCII 数字
fn is_identity_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> FingerprintNormalizer {
        FingerprintNormalizer::new().expect("归一化器构造失败")
    }

    #[test]
    fn strips_leading_enumeration() {
        let n = normalizer();
        assert_eq!(n.normalize("1. 统战工作的性质是什么"), "统战工作的性质是什么");
        assert_eq!(n.normalize("102.什么是民主协商"), "什么是民主协商");
    }

    #[test]
    fn removes_punctuation_and_whitespace() {
        let n = normalizer();
        assert_eq!(
            n.normalize("统战工作，（重点）的 性质？"),
            "统战工作重点的性质"
        );
        assert_eq!(n.normalize("ABC 123，测试！"), "ABC123测试");
    }

    #[test]
    fn normalization_is_idempotent() {
        let n = normalizer();
        let inputs = [
            "1. 统战工作的性质是什么？",
            "  多行\n题干，带标点……",
            "plain ascii text 42",
            "",
        ];
        for input in inputs {
            let once = n.normalize(input);
            assert_eq!(n.normalize(&once), once, "输入: {:?}", input);
        }
    }

    #[test]
    fn only_leading_enumeration_is_stripped() {
        let n = normalizer();
        // 题干中间的 "2." 不是编号，数字本身保留
        assert_eq!(n.normalize("1. 见下文2.条款的规定"), "见下文2条款的规定");
    }

    #[test]
    fn case_and_order_sensitive() {
        let n = normalizer();
        assert_ne!(n.normalize("Abc"), n.normalize("abc"));
        assert_ne!(n.normalize("甲乙"), n.normalize("乙甲"));
    }
}
