//! SQLite Promo Code Repository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{PromoCodeRecord, PromoCodeRepositoryPort, RepositoryError};
use crate::domain::promotion::CodeType;

/// SQLite Promo Code Repository
pub struct SqlitePromoCodeRepository {
    pool: DbPool,
}

impl SqlitePromoCodeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PromoCodeRow {
    code: String,
    expire_date: String,
    max_usages: i64,
    total_usages: i64,
    amount: String,
    currency: String,
    code_type: String,
    created_at: String,
}

impl TryFrom<PromoCodeRow> for PromoCodeRecord {
    type Error = RepositoryError;

    fn try_from(row: PromoCodeRow) -> Result<Self, Self::Error> {
        Ok(PromoCodeRecord {
            code: row.code,
            expire_date: NaiveDate::parse_from_str(&row.expire_date, "%Y-%m-%d")
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            max_usages: row.max_usages,
            total_usages: row.total_usages,
            amount: row
                .amount
                .parse::<Decimal>()
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            currency: row.currency,
            code_type: CodeType::from_str(&row.code_type).ok_or_else(|| {
                RepositoryError::SerializationError(format!(
                    "Unknown code type: {}",
                    row.code_type
                ))
            })?,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl PromoCodeRepositoryPort for SqlitePromoCodeRepository {
    async fn save(&self, promo_code: &PromoCodeRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO promo_codes
                (code, expire_date, max_usages, total_usages, amount, currency, code_type, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&promo_code.code)
        .bind(promo_code.expire_date.format("%Y-%m-%d").to_string())
        .bind(promo_code.max_usages)
        .bind(promo_code.total_usages)
        .bind(promo_code.amount.to_string())
        .bind(&promo_code.currency)
        .bind(promo_code.code_type.as_str())
        .bind(promo_code.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return RepositoryError::Duplicate(
                        "Given promo code already exists".to_string(),
                    );
                }
            }
            RepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<PromoCodeRecord>, RepositoryError> {
        let row: Option<PromoCodeRow> = sqlx::query_as(
            r#"
            SELECT code, expire_date, max_usages, total_usages, amount, currency, code_type, created_at
            FROM promo_codes WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(PromoCodeRecord::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<PromoCodeRecord>, RepositoryError> {
        let rows: Vec<PromoCodeRow> = sqlx::query_as(
            r#"
            SELECT code, expire_date, max_usages, total_usages, amount, currency, code_type, created_at
            FROM promo_codes ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(PromoCodeRecord::try_from).collect()
    }

    async fn increment_usages(&self, code: &str) -> Result<bool, RepositoryError> {
        // 守卫式自增，次数用尽时不改行
        let result = sqlx::query(
            r#"
            UPDATE promo_codes
            SET total_usages = total_usages + 1
            WHERE code = ? AND total_usages < max_usages
            "#,
        )
        .bind(code)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
