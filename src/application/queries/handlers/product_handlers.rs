//! Product Query Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{ProductRecord, ProductRepositoryPort, PromoCodeRepositoryPort};
use crate::application::queries::{GetProductDiscountPrice, ListProducts};
use crate::domain::format_money;

// ============================================================================
// Response DTOs
// ============================================================================

/// 商品详情响应
#[derive(Debug, Clone)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// 两位小数字符串
    pub price: String,
    pub currency: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            price: format_money(record.price),
            currency: record.currency,
        }
    }
}

/// 折扣价响应
///
/// 促销码不可用时 `warning` 说明原因，`discount_price` 回落为原价。
#[derive(Debug, Clone)]
pub struct DiscountPriceResponse {
    pub discount_price: String,
    pub warning: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListProducts Handler
pub struct ListProductsHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl ListProductsHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }

    pub async fn handle(&self, _query: ListProducts) -> Result<Vec<ProductResponse>, ApplicationError> {
        let products = self.product_repo.find_all().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}

/// GetProductDiscountPrice Handler
pub struct GetProductDiscountPriceHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
    promo_code_repo: Arc<dyn PromoCodeRepositoryPort>,
}

impl GetProductDiscountPriceHandler {
    pub fn new(
        product_repo: Arc<dyn ProductRepositoryPort>,
        promo_code_repo: Arc<dyn PromoCodeRepositoryPort>,
    ) -> Self {
        Self {
            product_repo,
            promo_code_repo,
        }
    }

    pub async fn handle(
        &self,
        query: GetProductDiscountPrice,
    ) -> Result<DiscountPriceResponse, ApplicationError> {
        let product = self
            .product_repo
            .find_by_id(query.product_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Product", query.product_id))?;

        let promo_code = self
            .promo_code_repo
            .find_by_code(&query.code)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Promo code", &query.code))?;

        let quote = promo_code
            .terms()
            .quote(product.price, &product.currency, Utc::now().date_naive());

        Ok(DiscountPriceResponse {
            discount_price: format_money(quote.discount_price),
            warning: quote.warning.map(|w| w.message().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::PromoCodeRecord;
    use crate::domain::promotion::CodeType;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteProductRepository,
        SqlitePromoCodeRepository,
    };
    use chrono::Duration;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    struct Fixture {
        product_repo: Arc<dyn ProductRepositoryPort>,
        promo_code_repo: Arc<dyn PromoCodeRepositoryPort>,
    }

    async fn setup() -> Fixture {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Fixture {
            product_repo: Arc::new(SqliteProductRepository::new(pool.clone())),
            promo_code_repo: Arc::new(SqlitePromoCodeRepository::new(pool)),
        }
    }

    async fn seed_product(fixture: &Fixture, price: Decimal, currency: &str) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        fixture
            .product_repo
            .save(&ProductRecord {
                id,
                name: format!("Product {}", id),
                description: None,
                price,
                currency: currency.to_string(),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
        id
    }

    async fn seed_code(fixture: &Fixture, code: &str, amount: Decimal, code_type: CodeType) {
        fixture
            .promo_code_repo
            .save(&PromoCodeRecord {
                code: code.to_string(),
                expire_date: Utc::now().date_naive() + Duration::days(30),
                max_usages: 10,
                total_usages: 0,
                amount,
                currency: "USD".to_string(),
                code_type,
                created_at: Utc::now(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_quantitative_discount_price() {
        let fixture = setup().await;
        let product_id = seed_product(&fixture, dec!(10.00), "USD").await;
        seed_code(&fixture, "MINUS5", dec!(5.00), CodeType::Quantitative).await;

        let handler = GetProductDiscountPriceHandler::new(
            fixture.product_repo.clone(),
            fixture.promo_code_repo.clone(),
        );
        let response = handler
            .handle(GetProductDiscountPrice {
                product_id,
                code: "MINUS5".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.discount_price, "5.00");
        assert_eq!(response.warning, None);
    }

    #[tokio::test]
    async fn test_percentage_discount_price() {
        let fixture = setup().await;
        let product_id = seed_product(&fixture, dec!(10.00), "USD").await;
        seed_code(&fixture, "QUARTER", dec!(25.00), CodeType::Percentage).await;

        let handler = GetProductDiscountPriceHandler::new(
            fixture.product_repo.clone(),
            fixture.promo_code_repo.clone(),
        );
        let response = handler
            .handle(GetProductDiscountPrice {
                product_id,
                code: "QUARTER".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.discount_price, "7.50");
        assert_eq!(response.warning, None);
    }

    #[tokio::test]
    async fn test_currency_mismatch_returns_warning_with_regular_price() {
        let fixture = setup().await;
        let product_id = seed_product(&fixture, dec!(10.00), "EUR").await;
        seed_code(&fixture, "USDONLY", dec!(5.00), CodeType::Quantitative).await;

        let handler = GetProductDiscountPriceHandler::new(
            fixture.product_repo.clone(),
            fixture.promo_code_repo.clone(),
        );
        let response = handler
            .handle(GetProductDiscountPrice {
                product_id,
                code: "USDONLY".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.discount_price, "10.00");
        assert_eq!(
            response.warning.as_deref(),
            Some("Promo code currency does not match product price currency")
        );
    }

    #[tokio::test]
    async fn test_unknown_code_returns_not_found() {
        let fixture = setup().await;
        let product_id = seed_product(&fixture, dec!(10.00), "USD").await;

        let handler = GetProductDiscountPriceHandler::new(
            fixture.product_repo.clone(),
            fixture.promo_code_repo.clone(),
        );
        let err = handler
            .handle(GetProductDiscountPrice {
                product_id,
                code: "MISSING".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_products_formats_price() {
        let fixture = setup().await;
        seed_product(&fixture, dec!(19.9), "USD").await;

        let handler = ListProductsHandler::new(fixture.product_repo.clone());
        let products = handler.handle(ListProducts).await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price, "19.90");
    }
}
