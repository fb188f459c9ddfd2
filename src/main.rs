//! 个股资金流向查询工具
//!
//! 用法: akshare-fundflow <股票代码>
//! 数据来源：东方财富资金流向日K线接口
//! stdout 只输出一行 JSON，诊断信息全部走 stderr，供上层进程直接解析

mod config;
mod models;   // 数据模型定义
mod services; // 业务逻辑服务

use std::env;
use std::process;

use env_logger::Env;

use crate::config::AppConfig;
use crate::services::fund_flow_service;

/// 程序入口
///
/// 只要提供了股票代码参数，进程必定以 0 退出并输出一份合法快照，
/// 数据层的任何失败都降级为全零快照；仅参数个数错误时以 1 退出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统，默认日志级别为 info
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        // 用法提示约定输出到 stdout
        println!("Usage: akshare-fundflow <stock_code>");
        process::exit(1);
    }

    let config = AppConfig::load();
    let snapshot = fund_flow_service::get_fund_flow(&config, &args[1]).await;

    println!("{}", serde_json::to_string(&snapshot)?);
    Ok(())
}
