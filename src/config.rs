use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// 配置文件路径（可选，不存在时使用默认值）
const CONFIG_FILE: &str = "config.toml";

/// 程序配置
///
/// 所有可调项集中在这里，核心逻辑不读任何全局状态。
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// diff 模式：第一份试题文本（PDF 导出的纯文本，换页符分页）
    pub diff_file_1: String,
    /// diff 模式：第二份试题文本
    pub diff_file_2: String,
    /// diff 模式：差异报告输出路径
    pub diff_output_file: String,
    /// merge 模式：CSV 题库路径
    pub bank_csv_path: String,
    /// 浏览器调试端口
    pub browser_debug_port: u16,
    /// merge 模式：目标URL
    pub target_url: String,
    /// 页眉页脚等干扰行的识别子串
    pub noise_markers: Vec<String>,
    /// 答案区域开始的识别子串（命中后本页后续行全部视为噪声）
    pub answer_markers: Vec<String>,
    /// 指纹最小长度（严格大于才入库，过滤解析碎片）
    pub min_fingerprint_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diff_file_1: "1111111.txt".to_string(),
            diff_file_2: "2222222.txt".to_string(),
            diff_output_file: "差异题目汇总.txt".to_string(),
            bank_csv_path: "题库.csv".to_string(),
            browser_debug_port: 2001,
            target_url: "https://www.yuketang.cn/v2/web/index".to_string(),
            noise_markers: vec![
                "适用学期".to_string(),
                "整理人".to_string(),
                "PAGE".to_string(),
            ],
            answer_markers: vec![
                "参考答案".to_string(),
                "单选题答案".to_string(),
                "多选题答案".to_string(),
            ],
            min_fingerprint_len: 5,
        }
    }
}

impl Config {
    /// 加载配置：config.toml（可选）叠加环境变量覆盖
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            let content = std::fs::read_to_string(CONFIG_FILE)
                .with_context(|| format!("无法读取配置文件: {}", CONFIG_FILE))?;
            toml::from_str(&content)
                .with_context(|| format!("无法解析配置文件: {}", CONFIG_FILE))?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// 环境变量覆盖（仅标量项）
    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("DIFF_FILE_1") {
            self.diff_file_1 = v;
        }
        if let Ok(v) = std::env::var("DIFF_FILE_2") {
            self.diff_file_2 = v;
        }
        if let Ok(v) = std::env::var("DIFF_OUTPUT_FILE") {
            self.diff_output_file = v;
        }
        if let Ok(v) = std::env::var("BANK_CSV_PATH") {
            self.bank_csv_path = v;
        }
        if let Some(v) = std::env::var("BROWSER_DEBUG_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.browser_debug_port = v;
        }
        if let Ok(v) = std::env::var("TARGET_URL") {
            self.target_url = v;
        }
        if let Some(v) = std::env::var("MIN_FINGERPRINT_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.min_fingerprint_len = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_markers_cover_answer_sections() {
        let config = Config::default();
        assert!(config.answer_markers.iter().any(|m| m == "参考答案"));
        assert_eq!(config.min_fingerprint_len, 5);
    }

    #[test]
    fn toml_overlay_keeps_missing_fields_at_default() {
        let config: Config =
            toml::from_str(r#"diff_file_1 = "a.txt""#).expect("合法的配置片段");
        assert_eq!(config.diff_file_1, "a.txt");
        assert_eq!(config.min_fingerprint_len, Config::default().min_fingerprint_len);
    }
}
