//! Purchase HTTP Handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{CurrencySalesResponse, GetSalesReport, RecordPurchase};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

/// 记录购买查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPurchaseParams {
    pub product_id: Uuid,
    /// 缺省时按原价购买
    #[serde(default)]
    pub code: Option<String>,
}

/// 单一货币的销售汇总
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencySalesDto {
    pub currency: String,
    /// 两位小数字符串
    pub total_amount: String,
    /// 两位小数字符串
    pub total_discount: String,
    pub no_of_purchases: u64,
}

impl From<CurrencySalesResponse> for CurrencySalesDto {
    fn from(response: CurrencySalesResponse) -> Self {
        Self {
            currency: response.currency,
            total_amount: response.total_amount,
            total_discount: response.total_discount,
            no_of_purchases: response.no_of_purchases,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 记录一次购买
pub async fn record_purchase(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecordPurchaseParams>,
) -> Result<StatusCode, ApiError> {
    state
        .record_purchase_handler
        .handle(RecordPurchase {
            product_id: params.product_id,
            code: params.code,
        })
        .await?;

    Ok(StatusCode::CREATED)
}

/// 按货币汇总的销售报表
pub async fn get_sales_report(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CurrencySalesDto>>, ApiError> {
    let report = state.get_sales_report_handler.handle(GetSalesReport).await?;
    Ok(Json(report.into_iter().map(CurrencySalesDto::from).collect()))
}
