use anyhow::Result;
use question_diff_merge::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    question_diff_merge::logger::init();

    // 加载配置（config.toml 可选，环境变量覆盖）
    let config = Config::load()?;

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_default();

    match mode.as_str() {
        "diff" => {
            // 可选的位置参数覆盖配置中的两个输入文件
            let mut config = config;
            if let Some(p) = args.next() {
                config.diff_file_1 = p;
            }
            if let Some(p) = args.next() {
                config.diff_file_2 = p;
            }
            App::new(config).run_diff().await?;
        }
        "merge" => {
            App::new(config).run_merge().await?;
        }
        _ => {
            eprintln!("用法: question_diff_merge <diff|merge> [文件1] [文件2]");
            eprintln!("  diff   对比两份试题文本，输出差异报告");
            eprintln!("  merge  连接浏览器，增量抓取题目并合并到题库");
            std::process::exit(2);
        }
    }

    Ok(())
}
