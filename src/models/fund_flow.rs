//! 资金流向数据模型
//!
//! 定义资金流向的原始记录和对外输出的快照结构

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 单个交易日的资金流向原始记录
///
/// 字段名沿用数据源的中文列名，值保留原始字符串，数值转换推迟到取数时
#[derive(Debug, Clone)]
pub struct FundFlowRow {
    /// 交易日（YYYY-MM-DD）
    pub date: String,
    /// 列名 -> 原始值
    pub fields: HashMap<String, String>,
}

impl FundFlowRow {
    /// 按列名取数值，列缺失或无法解析时返回 0.0
    pub fn amount(&self, column: &str) -> f64 {
        self.fields
            .get(column)
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

/// 资金流向快照
///
/// 对外输出契约：八个字段恒定存在且为数值，无数据时为 0
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FundFlowSnapshot {
    /// 主力净流入净额
    pub main_net_inflow: f64,
    /// 超大单净流入净额
    pub super_large_net_inflow: f64,
    /// 大单净流入净额
    pub large_net_inflow: f64,
    /// 中单净流入净额
    pub medium_net_inflow: f64,
    /// 小单净流入净额
    pub small_net_inflow: f64,
    /// 主力净流入净占比
    pub net_inflow_ratio: f64,
    /// 主力主动买入金额
    pub active_buy_amount: f64,
    /// 主力主动卖出金额
    pub active_sell_amount: f64,
}
