//! Application State
//!
//! 持有所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateProductHandler, CreatePromoCodeHandler, RecordPurchaseHandler, UpdateProductHandler,
    // Query handlers
    GetProductDiscountPriceHandler, GetPromoCodeHandler, GetSalesReportHandler,
    ListProductsHandler, ListPromoCodesHandler,
    // Ports
    ProductRepositoryPort, PromoCodeRepositoryPort, PurchaseRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_product_handler: CreateProductHandler,
    pub update_product_handler: UpdateProductHandler,
    pub create_promo_code_handler: CreatePromoCodeHandler,
    pub record_purchase_handler: RecordPurchaseHandler,

    // ========== Query Handlers ==========
    pub list_products_handler: ListProductsHandler,
    pub get_discount_price_handler: GetProductDiscountPriceHandler,
    pub get_promo_code_handler: GetPromoCodeHandler,
    pub list_promo_codes_handler: ListPromoCodesHandler,
    pub get_sales_report_handler: GetSalesReportHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        product_repo: Arc<dyn ProductRepositoryPort>,
        promo_code_repo: Arc<dyn PromoCodeRepositoryPort>,
        purchase_repo: Arc<dyn PurchaseRepositoryPort>,
    ) -> Self {
        Self {
            // Command handlers
            create_product_handler: CreateProductHandler::new(product_repo.clone()),
            update_product_handler: UpdateProductHandler::new(product_repo.clone()),
            create_promo_code_handler: CreatePromoCodeHandler::new(promo_code_repo.clone()),
            record_purchase_handler: RecordPurchaseHandler::new(
                product_repo.clone(),
                promo_code_repo.clone(),
                purchase_repo.clone(),
            ),

            // Query handlers
            list_products_handler: ListProductsHandler::new(product_repo.clone()),
            get_discount_price_handler: GetProductDiscountPriceHandler::new(
                product_repo,
                promo_code_repo.clone(),
            ),
            get_promo_code_handler: GetPromoCodeHandler::new(promo_code_repo.clone()),
            list_promo_codes_handler: ListPromoCodesHandler::new(promo_code_repo),
            get_sales_report_handler: GetSalesReportHandler::new(purchase_repo),
        }
    }
}
