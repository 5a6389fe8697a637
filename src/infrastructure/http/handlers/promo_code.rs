//! Promo Code HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{CreatePromoCode, GetPromoCode, ListPromoCodes, PromoCodeResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

/// 创建促销码请求体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromoCodeRequest {
    pub code: String,
    pub expire_date: NaiveDate,
    pub max_usages: i64,
    pub amount: Decimal,
    pub currency: String,
    /// "QUANTITATIVE" 或 "PERCENTAGE"
    pub code_type: String,
}

/// 创建促销码响应
#[derive(Debug, Serialize)]
pub struct CodeResponse {
    pub code: String,
}

/// 促销码详情
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCodeDto {
    pub code: String,
    pub expire_date: NaiveDate,
    pub max_usages: i64,
    pub total_usages: i64,
    /// 两位小数字符串
    pub amount: String,
    pub currency: String,
    pub code_type: String,
}

impl From<PromoCodeResponse> for PromoCodeDto {
    fn from(response: PromoCodeResponse) -> Self {
        Self {
            code: response.code,
            expire_date: response.expire_date,
            max_usages: response.max_usages,
            total_usages: response.total_usages,
            amount: response.amount,
            currency: response.currency,
            code_type: response.code_type,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 创建促销码
pub async fn create_promo_code(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreatePromoCodeRequest>,
) -> Result<(StatusCode, Json<CodeResponse>), ApiError> {
    let response = state
        .create_promo_code_handler
        .handle(CreatePromoCode {
            code: request.code,
            expire_date: request.expire_date,
            max_usages: request.max_usages,
            amount: request.amount,
            currency: request.currency,
            code_type: request.code_type,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CodeResponse {
            code: response.code,
        }),
    ))
}

/// 列出所有促销码
pub async fn list_promo_codes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PromoCodeDto>>, ApiError> {
    let codes = state.list_promo_codes_handler.handle(ListPromoCodes).await?;
    Ok(Json(codes.into_iter().map(PromoCodeDto::from).collect()))
}

/// 获取促销码详情
pub async fn get_promo_code(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<PromoCodeDto>, ApiError> {
    let response = state
        .get_promo_code_handler
        .handle(GetPromoCode { code })
        .await?;

    Ok(Json(PromoCodeDto::from(response)))
}
