//! 资金流向数据源模块
//!
//! 目前只对接东方财富一个数据源

pub mod eastmoney;

// 重新导出常用函数，保持对外接口一致
pub use eastmoney::fetch_fund_flow;
