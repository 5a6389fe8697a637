//! Purchase Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::PurchaseRepositoryPort;
use crate::application::queries::GetSalesReport;
use crate::domain::format_money;
use crate::domain::sales::{summarize_by_currency, CurrencySales};

// ============================================================================
// Response DTOs
// ============================================================================

/// 单一货币的销售汇总响应
#[derive(Debug, Clone)]
pub struct CurrencySalesResponse {
    pub currency: String,
    /// 两位小数字符串
    pub total_amount: String,
    /// 两位小数字符串
    pub total_discount: String,
    pub no_of_purchases: u64,
}

impl From<CurrencySales> for CurrencySalesResponse {
    fn from(sales: CurrencySales) -> Self {
        Self {
            currency: sales.currency,
            total_amount: format_money(sales.total_amount),
            total_discount: format_money(sales.total_discount),
            no_of_purchases: sales.purchase_count,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetSalesReport Handler
///
/// 汇总在 Decimal 上进行，避免 SQLite 对 TEXT 金额求和时走浮点。
pub struct GetSalesReportHandler {
    purchase_repo: Arc<dyn PurchaseRepositoryPort>,
}

impl GetSalesReportHandler {
    pub fn new(purchase_repo: Arc<dyn PurchaseRepositoryPort>) -> Self {
        Self { purchase_repo }
    }

    pub async fn handle(
        &self,
        _query: GetSalesReport,
    ) -> Result<Vec<CurrencySalesResponse>, ApplicationError> {
        let lines = self.purchase_repo.find_sales_lines().await?;
        let report = summarize_by_currency(&lines);
        Ok(report.into_iter().map(CurrencySalesResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ProductRecord, ProductRepositoryPort, PurchaseRecord};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteProductRepository,
        SqlitePurchaseRepository,
    };
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    struct Fixture {
        product_repo: Arc<dyn ProductRepositoryPort>,
        purchase_repo: Arc<dyn PurchaseRepositoryPort>,
    }

    async fn setup() -> Fixture {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Fixture {
            product_repo: Arc::new(SqliteProductRepository::new(pool.clone())),
            purchase_repo: Arc::new(SqlitePurchaseRepository::new(pool)),
        }
    }

    async fn seed_purchase(fixture: &Fixture, currency: &str, price: Decimal, discount: Decimal) {
        let product_id = Uuid::new_v4();
        let now = Utc::now();
        fixture
            .product_repo
            .save(&ProductRecord {
                id: product_id,
                name: format!("Product {}", product_id),
                description: None,
                price,
                currency: currency.to_string(),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
        fixture
            .purchase_repo
            .save(&PurchaseRecord {
                id: Uuid::new_v4(),
                product_id,
                regular_price: price,
                discount,
                timestamp: Utc::now(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_report() {
        let fixture = setup().await;
        let handler = GetSalesReportHandler::new(fixture.purchase_repo.clone());

        let report = handler.handle(GetSalesReport).await.unwrap();
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn test_report_groups_by_currency() {
        let fixture = setup().await;
        seed_purchase(&fixture, "USD", dec!(10.00), dec!(2.50)).await;
        seed_purchase(&fixture, "USD", dec!(5.00), Decimal::ZERO).await;
        seed_purchase(&fixture, "EUR", dec!(8.00), dec!(1.00)).await;

        let handler = GetSalesReportHandler::new(fixture.purchase_repo.clone());
        let report = handler.handle(GetSalesReport).await.unwrap();

        assert_eq!(report.len(), 2);

        let usd = report.iter().find(|r| r.currency == "USD").unwrap();
        assert_eq!(usd.total_amount, "12.50");
        assert_eq!(usd.total_discount, "2.50");
        assert_eq!(usd.no_of_purchases, 2);

        let eur = report.iter().find(|r| r.currency == "EUR").unwrap();
        assert_eq!(eur.total_amount, "7.00");
        assert_eq!(eur.total_discount, "1.00");
        assert_eq!(eur.no_of_purchases, 1);
    }
}
