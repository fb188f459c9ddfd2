//! 个股资金流向服务
//!
//! 串联 市场判定 -> 数据获取 -> 最新快照 的完整流程，
//! 数据层的任何失败都在此降级为全零快照，保证输出契约恒定成立

use anyhow::Result;

use crate::config::AppConfig;
use crate::models::{strip_exchange_prefix, Exchange, FundFlowRow, FundFlowSnapshot};
use crate::services::fund_flow::eastmoney;

/// 获取个股资金流向快照
///
/// 入参允许带 SH/SZ 标签；不支持的代码、接口失败、空数据均返回全零快照
pub async fn get_fund_flow(config: &AppConfig, input: &str) -> FundFlowSnapshot {
    let code = strip_exchange_prefix(input);
    let exchange = Exchange::classify(code);

    if exchange == Exchange::Unsupported {
        log::debug!("不支持的股票代码: {}", code);
        return FundFlowSnapshot::default();
    }

    let rows = match fetch_rows(config, code, exchange).await {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("Error getting fund flow data for {}: {}", code, e);
            Vec::new()
        }
    };

    if let Some(row) = rows.last() {
        log::debug!("{} 最新资金流向交易日: {}", code, row.date);
    }

    latest_snapshot(&rows)
}

async fn fetch_rows(
    config: &AppConfig,
    code: &str,
    exchange: Exchange,
) -> Result<Vec<FundFlowRow>> {
    let client = config.build_client()?;
    eastmoney::fetch_fund_flow(&client, code, exchange).await
}

/// 取序列中最新一日的数据并映射为固定快照
///
/// 接口保证序列按日期升序，这里直接取末行；单列缺失只清零对应字段
pub fn latest_snapshot(rows: &[FundFlowRow]) -> FundFlowSnapshot {
    let row = match rows.last() {
        Some(row) => row,
        None => return FundFlowSnapshot::default(),
    };

    FundFlowSnapshot {
        main_net_inflow: row.amount(eastmoney::COL_MAIN_NET),
        super_large_net_inflow: row.amount(eastmoney::COL_SUPER_LARGE_NET),
        large_net_inflow: row.amount(eastmoney::COL_LARGE_NET),
        medium_net_inflow: row.amount(eastmoney::COL_MEDIUM_NET),
        small_net_inflow: row.amount(eastmoney::COL_SMALL_NET),
        net_inflow_ratio: row.amount(eastmoney::COL_MAIN_NET_RATIO),
        active_buy_amount: row.amount(eastmoney::COL_ACTIVE_BUY),
        active_sell_amount: row.amount(eastmoney::COL_ACTIVE_SELL),
    }
}

// ==================== 测试模块 ====================
