//! 交易所判定
//!
//! 按股票代码的数字前缀区分沪深两市

/// 交易所分类结果
///
/// `Unsupported` 是正常的判定结果而非错误，表示该代码不在支持范围内
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    /// 上海证券交易所
    Shanghai,
    /// 深圳证券交易所
    Shenzhen,
    /// 不支持的市场
    Unsupported,
}

/// 前缀判定表，按表内顺序匹配，先命中者生效
///
/// 扩展新前缀时必须保持有序表形式，避免重叠前缀导致判定歧义
const EXCHANGE_PREFIXES: [(&str, Exchange); 5] = [
    ("60", Exchange::Shanghai),
    ("68", Exchange::Shanghai),
    ("51", Exchange::Shanghai),
    ("00", Exchange::Shenzhen),
    ("30", Exchange::Shenzhen),
];

impl Exchange {
    /// 根据纯数字股票代码判定所属交易所
    pub fn classify(code: &str) -> Exchange {
        for (prefix, exchange) in EXCHANGE_PREFIXES {
            if code.starts_with(prefix) {
                return exchange;
            }
        }
        Exchange::Unsupported
    }

    /// 东方财富 secid 的市场编号（沪市 1，深市 0）
    pub fn market_id(&self) -> Option<&'static str> {
        match self {
            Exchange::Shanghai => Some("1"),
            Exchange::Shenzhen => Some("0"),
            Exchange::Unsupported => None,
        }
    }
}

/// 去掉代码开头的 SH/SZ 交易所标签（仅大写，恰好两位）
///
/// 标签只做剥离不做校验，市场判定始终以剩余的数字前缀为准
pub fn strip_exchange_prefix(input: &str) -> &str {
    if input.starts_with("SH") || input.starts_with("SZ") {
        &input[2..]
    } else {
        input
    }
}
