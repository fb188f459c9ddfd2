//! 业务逻辑服务模块
//!
//! 封装数据获取和处理逻辑

pub mod fund_flow;         // 资金流向数据源实现
pub mod fund_flow_service; // 资金流向服务
