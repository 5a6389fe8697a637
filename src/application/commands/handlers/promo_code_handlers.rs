//! Promo Code Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::CreatePromoCode;
use crate::application::error::ApplicationError;
use crate::application::ports::{PromoCodeRecord, PromoCodeRepositoryPort};

/// 创建促销码响应
#[derive(Debug, Clone)]
pub struct CreatePromoCodeResponse {
    pub code: String,
}

/// CreatePromoCode Handler
pub struct CreatePromoCodeHandler {
    promo_code_repo: Arc<dyn PromoCodeRepositoryPort>,
}

impl CreatePromoCodeHandler {
    pub fn new(promo_code_repo: Arc<dyn PromoCodeRepositoryPort>) -> Self {
        Self { promo_code_repo }
    }

    pub async fn handle(
        &self,
        command: CreatePromoCode,
    ) -> Result<CreatePromoCodeResponse, ApplicationError> {
        let code_type = command.validate(Utc::now().date_naive())?;

        // 码唯一性检查
        if self
            .promo_code_repo
            .find_by_code(&command.code)
            .await?
            .is_some()
        {
            return Err(ApplicationError::duplicate(
                "Given promo code already exists",
            ));
        }

        let promo_code = PromoCodeRecord {
            code: command.code.clone(),
            expire_date: command.expire_date,
            max_usages: command.max_usages,
            total_usages: 0,
            amount: command.amount,
            currency: command.currency,
            code_type,
            created_at: Utc::now(),
        };

        self.promo_code_repo.save(&promo_code).await?;

        tracing::info!(
            code = %promo_code.code,
            code_type = code_type.as_str(),
            "Promo code created"
        );

        Ok(CreatePromoCodeResponse { code: command.code })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqlitePromoCodeRepository,
    };
    use chrono::{Duration, NaiveDate};
    use rust_decimal_macros::dec;

    async fn setup() -> Arc<dyn PromoCodeRepositoryPort> {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Arc::new(SqlitePromoCodeRepository::new(pool))
    }

    fn command(code: &str) -> CreatePromoCode {
        CreatePromoCode {
            code: code.to_string(),
            expire_date: Utc::now().date_naive() + Duration::days(30),
            max_usages: 10,
            amount: dec!(5.00),
            currency: "USD".to_string(),
            code_type: "QUANTITATIVE".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_promo_code() {
        let repo = setup().await;
        let handler = CreatePromoCodeHandler::new(repo.clone());

        let response = handler.handle(command("SUMMER2024")).await.unwrap();
        assert_eq!(response.code, "SUMMER2024");

        let saved = repo.find_by_code("SUMMER2024").await.unwrap().unwrap();
        assert_eq!(saved.total_usages, 0);
        assert_eq!(saved.amount, dec!(5.00));
    }

    #[tokio::test]
    async fn test_create_promo_code_rejects_duplicate() {
        let repo = setup().await;
        let handler = CreatePromoCodeHandler::new(repo);

        handler.handle(command("SUMMER2024")).await.unwrap();
        let err = handler.handle(command("SUMMER2024")).await.unwrap_err();

        assert!(matches!(err, ApplicationError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_create_promo_code_rejects_past_expiry() {
        let repo = setup().await;
        let handler = CreatePromoCodeHandler::new(repo);

        let mut cmd = command("SUMMER2024");
        cmd.expire_date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let err = handler.handle(cmd).await.unwrap_err();

        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }
}
