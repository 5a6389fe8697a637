//! SQLite Product Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{ProductRecord, ProductRepositoryPort, RepositoryError};

/// SQLite Product Repository
pub struct SqliteProductRepository {
    pool: DbPool,
}

impl SqliteProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ProductRow {
    id: String,
    name: String,
    description: Option<String>,
    price: String,
    currency: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<ProductRow> for ProductRecord {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(ProductRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            name: row.name,
            description: row.description,
            price: row
                .price
                .parse::<Decimal>()
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            currency: row.currency,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

/// 把唯一约束冲突映射为 Duplicate，其余落为 DatabaseError
fn map_save_error(e: sqlx::Error, duplicate_message: &str) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return RepositoryError::Duplicate(duplicate_message.to_string());
        }
    }
    RepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ProductRepositoryPort for SqliteProductRepository {
    async fn save(&self, product: &ProductRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, currency, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                price = excluded.price,
                currency = excluded.currency,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.to_string())
        .bind(&product.currency)
        .bind(product.created_at.to_rfc3339())
        .bind(product.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_save_error(e, "Product with given name already exists"))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductRecord>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            "SELECT id, name, description, price, currency, created_at, updated_at FROM products WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(ProductRecord::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ProductRecord>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            "SELECT id, name, description, price, currency, created_at, updated_at FROM products WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(ProductRecord::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT id, name, description, price, currency, created_at, updated_at FROM products ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ProductRecord::try_from).collect()
    }
}
