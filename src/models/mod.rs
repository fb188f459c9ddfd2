pub mod exchange;
pub mod fund_flow;

pub use exchange::*;
pub use fund_flow::*;
