//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod product_repo;
mod promo_code_repo;
mod purchase_repo;

pub use database::*;
pub use product_repo::*;
pub use promo_code_repo::*;
pub use purchase_repo::*;
