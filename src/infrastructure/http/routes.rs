//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping                GET   健康检查
//! - /api/products            POST  创建商品
//! - /api/products            GET   列出所有商品
//! - /api/products/{id}       PUT   更新商品
//! - /api/products/{id}?code= GET   查询折扣价
//! - /api/codes               POST  创建促销码
//! - /api/codes               GET   列出所有促销码
//! - /api/codes/{code}        GET   获取促销码详情
//! - /api/purchases?productId=&code= POST 记录购买
//! - /api/purchases/report    GET   按货币汇总的销售报表

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/products", product_routes())
        .nest("/codes", promo_code_routes())
        .nest("/purchases", purchase_routes())
}

/// Product 路由
fn product_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(handlers::create_product).get(handlers::list_products))
        .route("/:id", put(handlers::update_product).get(handlers::get_discount_price))
}

/// Promo Code 路由
fn promo_code_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(handlers::create_promo_code).get(handlers::list_promo_codes))
        .route("/:code", get(handlers::get_promo_code))
}

/// Purchase 路由
fn purchase_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(handlers::record_purchase))
        .route("/report", get(handlers::get_sales_report))
}
