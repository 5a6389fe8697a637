//! Product HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreateProduct, GetProductDiscountPrice, ListProducts, ProductResponse, UpdateProduct,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

/// 创建/更新商品请求体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub currency: String,
}

/// 创建/更新商品响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdResponse {
    pub product_id: Uuid,
}

/// 商品详情
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub product_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// 两位小数字符串
    pub price: String,
    pub currency: String,
}

impl From<ProductResponse> for ProductDto {
    fn from(response: ProductResponse) -> Self {
        Self {
            product_id: response.id,
            name: response.name,
            description: response.description,
            price: response.price,
            currency: response.currency,
        }
    }
}

/// 折扣价查询参数
#[derive(Debug, Deserialize)]
pub struct DiscountPriceParams {
    pub code: String,
}

/// 折扣价响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountPriceDto {
    /// 两位小数字符串；促销码不可用时为原价
    pub discount_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// 创建商品
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductIdResponse>), ApiError> {
    let response = state
        .create_product_handler
        .handle(CreateProduct {
            name: request.name,
            description: request.description,
            price: request.price,
            currency: request.currency,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProductIdResponse {
            product_id: response.id,
        }),
    ))
}

/// 列出所有商品
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = state.list_products_handler.handle(ListProducts).await?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// 更新商品
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<Uuid>,
    Json(request): Json<ProductRequest>,
) -> Result<Json<ProductIdResponse>, ApiError> {
    let response = state
        .update_product_handler
        .handle(UpdateProduct {
            product_id,
            name: request.name,
            description: request.description,
            price: request.price,
            currency: request.currency,
        })
        .await?;

    Ok(Json(ProductIdResponse {
        product_id: response.id,
    }))
}

/// 查询商品使用促销码后的折扣价
///
/// `code` 为必填查询参数；码不可用时返回 200 + 原价 + warning。
pub async fn get_discount_price(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<Uuid>,
    Query(params): Query<DiscountPriceParams>,
) -> Result<Json<DiscountPriceDto>, ApiError> {
    let response = state
        .get_discount_price_handler
        .handle(GetProductDiscountPrice {
            product_id,
            code: params.code,
        })
        .await?;

    Ok(Json(DiscountPriceDto {
        discount_price: response.discount_price,
        warning: response.warning,
    }))
}
