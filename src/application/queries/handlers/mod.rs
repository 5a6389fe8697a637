//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod product_handlers;
mod promo_code_handlers;
mod purchase_handlers;

pub use product_handlers::*;
pub use promo_code_handlers::*;
pub use purchase_handlers::*;
