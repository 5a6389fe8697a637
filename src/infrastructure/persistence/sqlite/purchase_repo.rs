//! SQLite Purchase Repository

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{PurchaseRecord, PurchaseRepositoryPort, RepositoryError};
use crate::domain::sales::SalesLine;

/// SQLite Purchase Repository
pub struct SqlitePurchaseRepository {
    pool: DbPool,
}

impl SqlitePurchaseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SalesLineRow {
    currency: String,
    regular_price: String,
    discount: String,
}

impl TryFrom<SalesLineRow> for SalesLine {
    type Error = RepositoryError;

    fn try_from(row: SalesLineRow) -> Result<Self, Self::Error> {
        Ok(SalesLine {
            currency: row.currency,
            regular_price: row
                .regular_price
                .parse::<Decimal>()
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            discount: row
                .discount
                .parse::<Decimal>()
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl PurchaseRepositoryPort for SqlitePurchaseRepository {
    async fn save(&self, purchase: &PurchaseRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO purchases (id, product_id, regular_price, discount, timestamp)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(purchase.id.to_string())
        .bind(purchase.product_id.to_string())
        .bind(purchase.regular_price.to_string())
        .bind(purchase.discount.to_string())
        .bind(purchase.timestamp.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 金额求和留给应用层的 Decimal，这里只取行
    async fn find_sales_lines(&self) -> Result<Vec<SalesLine>, RepositoryError> {
        let rows: Vec<SalesLineRow> = sqlx::query_as(
            r#"
            SELECT p.currency AS currency, pu.regular_price AS regular_price, pu.discount AS discount
            FROM purchases pu
            JOIN products p ON p.id = pu.product_id
            ORDER BY pu.timestamp
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(SalesLine::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ProductRecord, ProductRepositoryPort};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteProductRepository,
    };
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    async fn setup() -> (SqliteProductRepository, SqlitePurchaseRepository) {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        (
            SqliteProductRepository::new(pool.clone()),
            SqlitePurchaseRepository::new(pool),
        )
    }

    async fn seed_product(products: &SqliteProductRepository, currency: &str) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        products
            .save(&ProductRecord {
                id,
                name: format!("Product {}", id),
                description: None,
                price: dec!(10.00),
                currency: currency.to_string(),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
        id
    }

    #[tokio::test]
    async fn test_sales_lines_join_product_currency() {
        let (products, purchases) = setup().await;
        let product_id = seed_product(&products, "EUR").await;

        purchases
            .save(&PurchaseRecord {
                id: Uuid::new_v4(),
                product_id,
                regular_price: dec!(10.00),
                discount: dec!(2.50),
                timestamp: Utc::now(),
            })
            .await
            .unwrap();

        let lines = purchases.find_sales_lines().await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].currency, "EUR");
        assert_eq!(lines[0].regular_price, dec!(10.00));
        assert_eq!(lines[0].discount, dec!(2.50));
    }

    #[tokio::test]
    async fn test_sales_lines_ordered_by_timestamp() {
        let (products, purchases) = setup().await;
        let product_id = seed_product(&products, "USD").await;

        let base = Utc::now();
        for (offset_secs, price) in [(10, dec!(2.00)), (0, dec!(1.00))] {
            purchases
                .save(&PurchaseRecord {
                    id: Uuid::new_v4(),
                    product_id,
                    regular_price: price,
                    discount: Decimal::ZERO,
                    timestamp: base + chrono::Duration::seconds(offset_secs),
                })
                .await
                .unwrap();
        }

        let lines = purchases.find_sales_lines().await.unwrap();
        assert_eq!(lines[0].regular_price, dec!(1.00));
        assert_eq!(lines[1].regular_price, dec!(2.00));
    }

    #[tokio::test]
    async fn test_no_purchases_gives_no_lines() {
        let (_, purchases) = setup().await;
        assert!(purchases.find_sales_lines().await.unwrap().is_empty());
    }
}
