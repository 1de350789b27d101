use anyhow::{Context, Result};
use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::{sleep, Duration};
use tracing::{debug, info};

/// 连接到已开启调试端口的浏览器
///
/// 没有任何打开的标签页时新建一个并导航到目标页面。
pub async fn connect_to_browser(port: u16, target_url: &str) -> Result<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("正在连接到浏览器: {}", browser_url);

    let (browser, mut handler) = Browser::connect(&browser_url)
        .await
        .with_context(|| format!("无法连接到浏览器 (端口: {})", port))?;
    debug!("浏览器连接成功");

    // 在后台处理浏览器事件
    tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 等待浏览器状态同步
    sleep(Duration::from_millis(300)).await;

    let pages = browser.pages().await.context("无法获取浏览器页面列表")?;
    debug!("获取到 {} 个页面", pages.len());

    let page = match pages.into_iter().last() {
        Some(page) => page,
        None => {
            debug!("没有打开的页面，创建新页面并导航到: {}", target_url);
            let page = browser
                .new_page("about:blank")
                .await
                .context("创建新页面失败")?;
            page.goto(target_url)
                .await
                .with_context(|| format!("导航到 {} 失败", target_url))?;
            info!("已导航到: {}", target_url);
            page
        }
    };

    Ok((browser, page))
}

/// 取最新打开的标签页
///
/// 查看试卷会弹出新窗口，每次抓取前都切到最后一个标签页，
/// 与手工操作"切到最新窗口"一致。
pub async fn newest_page(browser: &Browser) -> Result<Page> {
    let pages = browser.pages().await.context("无法获取浏览器页面列表")?;
    pages
        .into_iter()
        .last()
        .context("浏览器没有任何打开的页面")
}
