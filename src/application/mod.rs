//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Product commands
    CreateProduct,
    UpdateProduct,
    // Promo code commands
    CreatePromoCode,
    // Purchase commands
    RecordPurchase,
    // Handlers
    handlers::{
        CreateProductHandler, CreateProductResponse, CreatePromoCodeHandler,
        CreatePromoCodeResponse, RecordPurchaseHandler, RecordPurchaseResponse,
        UpdateProductHandler, UpdateProductResponse,
    },
};

pub use error::ApplicationError;

pub use ports::{
    ProductRecord, ProductRepositoryPort, PromoCodeRecord, PromoCodeRepositoryPort,
    PurchaseRecord, PurchaseRepositoryPort, RepositoryError,
};

pub use queries::{
    // Product queries
    GetProductDiscountPrice,
    ListProducts,
    // Promo code queries
    GetPromoCode,
    ListPromoCodes,
    // Purchase queries
    GetSalesReport,
    // Handlers
    handlers::{
        CurrencySalesResponse, DiscountPriceResponse, GetProductDiscountPriceHandler,
        GetPromoCodeHandler, GetSalesReportHandler, ListProductsHandler, ListPromoCodesHandler,
        ProductResponse, PromoCodeResponse,
    },
};
