//! 东方财富个股资金流向接口实现
//!
//! 对接 push2his 资金流向日K线接口
//! 对应 akshare 的 stock_individual_fund_flow() 函数

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::collections::HashMap;

use crate::models::{Exchange, FundFlowRow};

/// 东方财富资金流向日K线 API
const EASTMONEY_FFLOW_API: &str =
    "https://push2his.eastmoney.com/api/qt/stock/fflow/daykline/get";
/// 接口固定 ut 参数
const EASTMONEY_UT: &str = "b2884a393a59ad64002292a3e90d46a5";

// ==================== 数据源列名 ====================
// kline 文本为逗号分隔，各列含义由 fields2=f51..f65 的请求顺序决定

pub const COL_DATE: &str = "日期";
pub const COL_MAIN_NET: &str = "主力净流入-净额";
pub const COL_SMALL_NET: &str = "小单净流入-净额";
pub const COL_MEDIUM_NET: &str = "中单净流入-净额";
pub const COL_LARGE_NET: &str = "大单净流入-净额";
pub const COL_SUPER_LARGE_NET: &str = "超大单净流入-净额";
pub const COL_MAIN_NET_RATIO: &str = "主力净流入-净占比";
pub const COL_SMALL_NET_RATIO: &str = "小单净流入-净占比";
pub const COL_MEDIUM_NET_RATIO: &str = "中单净流入-净占比";
pub const COL_LARGE_NET_RATIO: &str = "大单净流入-净占比";
pub const COL_SUPER_LARGE_NET_RATIO: &str = "超大单净流入-净占比";
pub const COL_CLOSE: &str = "收盘价";
pub const COL_CHANGE_PERCENT: &str = "涨跌幅";
/// 主力买入成交额（日K线接口不提供该列，取数恒走缺省 0）
pub const COL_ACTIVE_BUY: &str = "主力买入成交额";
/// 主力卖出成交额（日K线接口不提供该列，取数恒走缺省 0）
pub const COL_ACTIVE_SELL: &str = "主力卖出成交额";

/// kline 各列的列名表，位置即含义，末尾两列接口未定义、不入表
const FFLOW_KLINE_COLUMNS: [&str; 13] = [
    COL_DATE,
    COL_MAIN_NET,
    COL_SMALL_NET,
    COL_MEDIUM_NET,
    COL_LARGE_NET,
    COL_SUPER_LARGE_NET,
    COL_MAIN_NET_RATIO,
    COL_SMALL_NET_RATIO,
    COL_MEDIUM_NET_RATIO,
    COL_LARGE_NET_RATIO,
    COL_SUPER_LARGE_NET_RATIO,
    COL_CLOSE,
    COL_CHANGE_PERCENT,
];

/// 获取个股资金流向历史数据
///
/// 调用方需保证 exchange 不为 Unsupported；接口返回按日期升序的日度序列
pub async fn fetch_fund_flow(
    client: &Client,
    code: &str,
    exchange: Exchange,
) -> Result<Vec<FundFlowRow>> {
    let market = exchange
        .market_id()
        .ok_or_else(|| anyhow!("无法确定 {} 所属市场", code))?;
    let secid = format!("{}.{}", market, code);

    log::debug!("请求资金流向数据 secid: {}", secid);

    let response = client
        .get(EASTMONEY_FFLOW_API)
        .query(&[
            ("lmt", "0"),
            ("klt", "101"),
            ("secid", secid.as_str()),
            ("fields1", "f1,f2,f3,f7"),
            (
                "fields2",
                "f51,f52,f53,f54,f55,f56,f57,f58,f59,f60,f61,f62,f63,f64,f65",
            ),
            ("ut", EASTMONEY_UT),
        ])
        .header("Referer", "https://www.eastmoney.com")
        .header(
            "User-Agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
        )
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!("获取资金流向数据失败: {}", response.status()));
    }

    let text = response.text().await?;
    parse_fflow_response(&text)
}

/// 解析资金流向日K线响应
///
/// data 为 null 视为无数据，返回空序列
pub fn parse_fflow_response(text: &str) -> Result<Vec<FundFlowRow>> {
    let json_data: serde_json::Value =
        serde_json::from_str(text).map_err(|e| anyhow!("解析JSON失败: {}", e))?;

    let klines = match json_data["data"]["klines"].as_array() {
        Some(arr) => arr,
        None => return Ok(Vec::new()),
    };

    let mut rows = Vec::with_capacity(klines.len());
    for kline in klines {
        if let Some(line) = kline.as_str() {
            rows.push(parse_kline(line));
        }
    }

    Ok(rows)
}

/// 按列名表拆解一行 kline 文本
fn parse_kline(line: &str) -> FundFlowRow {
    let values: Vec<&str> = line.split(',').collect();
    let mut date = String::new();
    let mut fields = HashMap::new();

    for (column, value) in FFLOW_KLINE_COLUMNS.iter().zip(values.iter()) {
        if *column == COL_DATE {
            date = value.to_string();
        } else {
            fields.insert(column.to_string(), value.to_string());
        }
    }

    FundFlowRow { date, fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试解析正常响应
    #[test]
    fn test_parse_fflow_response() {
        let mock = r#"{"rc":0,"rt":21,"data":{"code":"600000","market":1,"klines":[
            "2024-05-31,-1000.0,300.0,700.0,-400.0,-600.0,-1.23,0.37,0.86,-0.49,-0.74,8.01,0.25,0.0,0.0",
            "2024-06-03,12345.6,-2000.0,-3000.0,5000.0,7345.6,2.34,-0.38,-0.57,0.95,1.39,8.12,1.37,0.0,0.0"
        ]}}"#;

        let rows = parse_fflow_response(mock).unwrap();
        assert_eq!(rows.len(), 2);
        // 接口升序返回，顺序保持不变
        assert_eq!(rows[0].date, "2024-05-31");
        assert_eq!(rows[1].date, "2024-06-03");
        assert_eq!(rows[1].amount(COL_MAIN_NET), 12345.6);
        assert_eq!(rows[1].amount(COL_SUPER_LARGE_NET), 7345.6);
        assert_eq!(rows[0].amount(COL_MAIN_NET_RATIO), -1.23);
    }

    /// data 为 null 时返回空序列
    #[test]
    fn test_parse_fflow_response_null_data() {
        let mock = r#"{"rc":0,"rt":21,"svr":181669437,"lt":1,"full":0,"data":null}"#;
        let rows = parse_fflow_response(mock).unwrap();
        assert!(rows.is_empty());
    }

    /// 非 JSON 响应报错
    #[test]
    fn test_parse_fflow_response_invalid() {
        assert!(parse_fflow_response("<html>Forbidden</html>").is_err());
    }

    /// 列数不足时缺失列按缺省处理
    #[test]
    fn test_parse_kline_short_line() {
        let row = parse_kline("2024-06-03,12345.6");
        assert_eq!(row.date, "2024-06-03");
        assert_eq!(row.amount(COL_MAIN_NET), 12345.6);
        assert_eq!(row.amount(COL_SMALL_NET), 0.0);
        assert_eq!(row.amount(COL_CLOSE), 0.0);
    }

    /// 主动买卖列接口不提供，始终缺省为 0
    #[test]
    fn test_active_amount_columns_absent() {
        let row = parse_kline(
            "2024-06-03,12345.6,-2000.0,-3000.0,5000.0,7345.6,2.34,-0.38,-0.57,0.95,1.39,8.12,1.37,0.0,0.0",
        );
        assert_eq!(row.amount(COL_ACTIVE_BUY), 0.0);
        assert_eq!(row.amount(COL_ACTIVE_SELL), 0.0);
    }
}
