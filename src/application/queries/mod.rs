//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod product_queries;
mod promo_code_queries;
mod purchase_queries;

pub mod handlers;

pub use product_queries::*;
pub use promo_code_queries::*;
pub use purchase_queries::*;
