//! Promo Code Query Handlers

use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{PromoCodeRecord, PromoCodeRepositoryPort};
use crate::application::queries::{GetPromoCode, ListPromoCodes};
use crate::domain::format_money;

// ============================================================================
// Response DTOs
// ============================================================================

/// 促销码详情响应
#[derive(Debug, Clone)]
pub struct PromoCodeResponse {
    pub code: String,
    pub expire_date: NaiveDate,
    pub max_usages: i64,
    pub total_usages: i64,
    /// 两位小数字符串
    pub amount: String,
    pub currency: String,
    pub code_type: String,
}

impl From<PromoCodeRecord> for PromoCodeResponse {
    fn from(record: PromoCodeRecord) -> Self {
        Self {
            code: record.code,
            expire_date: record.expire_date,
            max_usages: record.max_usages,
            total_usages: record.total_usages,
            amount: format_money(record.amount),
            currency: record.currency,
            code_type: record.code_type.as_str().to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetPromoCode Handler
pub struct GetPromoCodeHandler {
    promo_code_repo: Arc<dyn PromoCodeRepositoryPort>,
}

impl GetPromoCodeHandler {
    pub fn new(promo_code_repo: Arc<dyn PromoCodeRepositoryPort>) -> Self {
        Self { promo_code_repo }
    }

    pub async fn handle(&self, query: GetPromoCode) -> Result<PromoCodeResponse, ApplicationError> {
        let promo_code = self
            .promo_code_repo
            .find_by_code(&query.code)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Promo code", &query.code))?;

        Ok(PromoCodeResponse::from(promo_code))
    }
}

/// ListPromoCodes Handler
pub struct ListPromoCodesHandler {
    promo_code_repo: Arc<dyn PromoCodeRepositoryPort>,
}

impl ListPromoCodesHandler {
    pub fn new(promo_code_repo: Arc<dyn PromoCodeRepositoryPort>) -> Self {
        Self { promo_code_repo }
    }

    pub async fn handle(
        &self,
        _query: ListPromoCodes,
    ) -> Result<Vec<PromoCodeResponse>, ApplicationError> {
        let promo_codes = self.promo_code_repo.find_all().await?;
        Ok(promo_codes.into_iter().map(PromoCodeResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::promotion::CodeType;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqlitePromoCodeRepository,
    };
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    async fn setup() -> Arc<dyn PromoCodeRepositoryPort> {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Arc::new(SqlitePromoCodeRepository::new(pool))
    }

    async fn seed(repo: &Arc<dyn PromoCodeRepositoryPort>, code: &str) {
        repo.save(&PromoCodeRecord {
            code: code.to_string(),
            expire_date: Utc::now().date_naive() + Duration::days(30),
            max_usages: 10,
            total_usages: 2,
            amount: dec!(5.5),
            currency: "USD".to_string(),
            code_type: CodeType::Quantitative,
            created_at: Utc::now(),
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_get_promo_code_maps_fields() {
        let repo = setup().await;
        seed(&repo, "SUMMER2024").await;

        let handler = GetPromoCodeHandler::new(repo);
        let response = handler
            .handle(GetPromoCode {
                code: "SUMMER2024".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.code, "SUMMER2024");
        assert_eq!(response.amount, "5.50");
        assert_eq!(response.total_usages, 2);
        assert_eq!(response.code_type, "QUANTITATIVE");
    }

    #[tokio::test]
    async fn test_get_unknown_promo_code_returns_not_found() {
        let repo = setup().await;
        let handler = GetPromoCodeHandler::new(repo);

        let err = handler
            .handle(GetPromoCode {
                code: "MISSING".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_promo_codes() {
        let repo = setup().await;
        seed(&repo, "FIRST1").await;
        seed(&repo, "SECOND2").await;

        let handler = ListPromoCodesHandler::new(repo);
        let codes = handler.handle(ListPromoCodes).await.unwrap();

        assert_eq!(codes.len(), 2);
    }
}
