//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod repositories;

pub use repositories::{
    ProductRecord, ProductRepositoryPort, PromoCodeRecord, PromoCodeRepositoryPort,
    PurchaseRecord, PurchaseRepositoryPort, RepositoryError,
};
