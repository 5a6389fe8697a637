//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod product_commands;
mod promo_code_commands;
mod purchase_commands;

pub mod handlers;

pub use product_commands::*;
pub use promo_code_commands::*;
pub use purchase_commands::*;
