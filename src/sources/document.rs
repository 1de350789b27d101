use crate::error::{AppError, AppResult};
use std::collections::VecDeque;
use std::path::Path;
use tracing::info;

/// 文档源：按逻辑页提供文本行
///
/// 核心不关心页面来自哪里（PDF 导出、粘贴文本、测试数据）。
pub trait DocumentSource {
    /// 下一页的行，没有更多页时返回 `Ok(None)`
    fn next_page(&mut self) -> AppResult<Option<Vec<String>>>;
}

/// 纯文本文件源
///
/// 页之间以换页符（U+000C，pdftotext 的分页约定）分隔；
/// 没有换页符的文件就是单页文档。
pub struct TextDocumentSource {
    pages: VecDeque<Vec<String>>,
}

impl TextDocumentSource {
    pub fn open(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::file_not_found(path.display().to_string()));
        }

        info!("正在读取文件: {} ...", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let pages = content
            .split('\u{0c}')
            .map(|page| page.lines().map(str::to_string).collect())
            .collect();

        Ok(Self { pages })
    }
}

impl DocumentSource for TextDocumentSource {
    fn next_page(&mut self) -> AppResult<Option<Vec<String>>> {
        Ok(self.pages.pop_front())
    }
}

/// 内存页源，测试与小工具用
pub struct PageBuffer {
    pages: VecDeque<Vec<String>>,
}

impl PageBuffer {
    pub fn new(pages: Vec<Vec<String>>) -> Self {
        Self {
            pages: pages.into(),
        }
    }
}

impl DocumentSource for PageBuffer {
    fn next_page(&mut self) -> AppResult<Option<Vec<String>>> {
        Ok(self.pages.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_pages_on_form_feed() {
        let dir = tempfile::tempdir().expect("临时目录创建失败");
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "第一页第一行\n第一页第二行\u{0c}第二页第一行\n")
            .expect("写入测试文件失败");

        let mut source = TextDocumentSource::open(&path).expect("打开失败");
        let page1 = source.next_page().expect("读取失败").expect("应有第一页");
        assert_eq!(page1, vec!["第一页第一行", "第一页第二行"]);
        let page2 = source.next_page().expect("读取失败").expect("应有第二页");
        assert_eq!(page2, vec!["第二页第一行"]);
        assert!(source.next_page().expect("读取失败").is_none());
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().expect("临时目录创建失败");
        let result = TextDocumentSource::open(&dir.path().join("不存在.txt"));
        assert!(result.is_err());
    }
}
