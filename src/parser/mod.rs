//! 核心解析流水线
//!
//! 原始文本行 → 行分类 → 题目组装 → 指纹归一化 → 题目集合

pub mod assembler;
pub mod classifier;
pub mod fingerprint;

pub use assembler::RecordAssembler;
pub use classifier::{LineClass, LineClassifier};
pub use fingerprint::FingerprintNormalizer;

use crate::config::Config;
use crate::models::QuestionRecord;
use crate::sources::DocumentSource;
use crate::store::RecordStore;
use anyhow::Result;
use tracing::{debug, info};

/// 题目解析器：把一个文档源解析成指纹键控的题目集合
pub struct QuestionParser {
    classifier: LineClassifier,
    assembler: RecordAssembler,
    normalizer: FingerprintNormalizer,
    min_fingerprint_len: usize,
}

impl QuestionParser {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            classifier: LineClassifier::new(config)?,
            assembler: RecordAssembler::new()?,
            normalizer: FingerprintNormalizer::new()?,
            min_fingerprint_len: config.min_fingerprint_len,
        })
    }

    /// 解析整个文档源
    ///
    /// 每页开始时重置答案区域标记；指纹过短的题目视为解析碎片，
    /// 静默丢弃；指纹重复时保留先出现的题目。
    pub fn parse_source(
        &mut self,
        source: &mut dyn DocumentSource,
    ) -> Result<RecordStore<QuestionRecord>> {
        let mut store = RecordStore::new(self.min_fingerprint_len);

        while let Some(page) = source.next_page()? {
            self.classifier.reset_page();
            for raw_line in &page {
                let Some(class) = self.classifier.classify(raw_line) else {
                    continue;
                };
                if let Some(record) = self.assembler.push(&class, raw_line.trim()) {
                    self.insert_record(&mut store, record);
                }
            }
        }

        if let Some(record) = self.assembler.finish() {
            self.insert_record(&mut store, record);
        }

        info!("✓ 解析完成，共提取 {} 道题", store.len());
        Ok(store)
    }

    fn insert_record(&self, store: &mut RecordStore<QuestionRecord>, record: QuestionRecord) {
        let fingerprint = self.normalizer.normalize(&record.stem);
        if !store.insert_if_new(fingerprint.clone(), record) {
            debug!("跳过题目（指纹过短或重复）: {}", fingerprint);
        }
    }
}
