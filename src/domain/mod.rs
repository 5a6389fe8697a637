//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Catalog Context: 商品目录
//! - Promotion Context: 促销码与折扣规则
//! - Sales Context: 销售汇总

pub mod catalog;
pub mod promotion;
pub mod sales;

// 共享的金额处理
mod money;

pub use money::{format_money, round_money};
