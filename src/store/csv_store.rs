use crate::error::{AppError, AppResult, BankError};
use crate::models::QuestionRow;
use crate::store::RecordStore;
use std::path::Path;
use tracing::{info, warn};

/// CSV 持久化的题库
///
/// 键是去过首尾空白的题目原文（merge 模式的查重依据，
/// 比 diff 模式的指纹更严格——抓取到的文本来自页面 DOM，本身是干净的）。
pub struct QuestionBank {
    store: RecordStore<QuestionRow>,
}

impl QuestionBank {
    pub fn empty(min_key_len: usize) -> Self {
        Self {
            store: RecordStore::new(min_key_len),
        }
    }

    /// 从 CSV 文件恢复题库
    ///
    /// 文件不存在视为首次运行，返回空题库；
    /// 缺少题目字段或解析失败的行记录警告后跳过，不中断加载。
    pub fn load(path: &Path, min_key_len: usize) -> AppResult<Self> {
        if !path.exists() {
            info!("✨ 未检测到旧题库，将创建新文件");
            return Ok(Self::empty(min_key_len));
        }

        info!("📂 正在加载旧题库: {} ...", path.display());
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let mut bank = Self::empty(min_key_len);
        // 第 1 行是表头，数据从第 2 行起
        for (index, result) in reader.deserialize::<QuestionRow>().enumerate() {
            let line = index + 2;
            match result {
                Ok(row) => {
                    let key = row.question.trim().to_string();
                    if key.is_empty() {
                        warn!("⚠️ {}", BankError::MissingQuestionText { line });
                        continue;
                    }
                    bank.store.insert_if_new(key, row);
                }
                Err(e) => {
                    warn!(
                        "⚠️ {}",
                        BankError::RowParseFailed {
                            line,
                            source: Box::new(e),
                        }
                    );
                }
            }
        }

        info!("✅ 成功加载历史题目: {} 道", bank.len());
        Ok(bank)
    }

    /// 按插入顺序写回 CSV（表头: 题目, 答案, A-G）
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let mut writer = csv::Writer::from_path(path)
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        for (_, row) in self.store.iter() {
            writer
                .serialize(row)
                .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;
        }
        writer
            .flush()
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        info!("📁 文件已保存更新: {}", path.display());
        Ok(())
    }

    /// 按题目原文查重插入，返回是否新增
    pub fn insert_if_new(&mut self, row: QuestionRow) -> bool {
        let key = row.question.trim().to_string();
        self.store.insert_if_new(key, row)
    }

    pub fn contains(&self, question: &str) -> bool {
        self.store.contains(question.trim())
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
