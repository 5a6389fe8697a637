//! Promostore - 商品、促销码与购买记录的电商后端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Catalog Context: 商品目录
//! - Promotion Context: 促销码与折扣规则
//! - Sales Context: 销售汇总
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Repositories）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
