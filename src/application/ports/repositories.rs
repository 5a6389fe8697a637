//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::promotion::{CodeType, PromoTerms};
use crate::domain::sales::SalesLine;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Product Repository
// ============================================================================

/// 商品实体（用于持久化）
#[derive(Debug, Clone)]
pub struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product Repository Port
#[async_trait]
pub trait ProductRepositoryPort: Send + Sync {
    /// 保存商品（按 ID upsert）
    async fn save(&self, product: &ProductRecord) -> Result<(), RepositoryError>;

    /// 根据 ID 查找商品
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductRecord>, RepositoryError>;

    /// 根据名称查找商品（名称唯一）
    async fn find_by_name(&self, name: &str) -> Result<Option<ProductRecord>, RepositoryError>;

    /// 获取所有商品
    async fn find_all(&self) -> Result<Vec<ProductRecord>, RepositoryError>;
}

// ============================================================================
// Promo Code Repository
// ============================================================================

/// 促销码实体（用于持久化）
#[derive(Debug, Clone)]
pub struct PromoCodeRecord {
    /// 促销码文本即主键
    pub code: String,
    pub expire_date: NaiveDate,
    pub max_usages: i64,
    pub total_usages: i64,
    pub amount: Decimal,
    pub currency: String,
    pub code_type: CodeType,
    pub created_at: DateTime<Utc>,
}

impl PromoCodeRecord {
    /// 转为折扣核算所用的促销条款
    pub fn terms(&self) -> PromoTerms {
        PromoTerms {
            expire_date: self.expire_date,
            max_usages: self.max_usages,
            total_usages: self.total_usages,
            amount: self.amount,
            currency: self.currency.clone(),
            code_type: self.code_type,
        }
    }
}

/// Promo Code Repository Port
#[async_trait]
pub trait PromoCodeRepositoryPort: Send + Sync {
    /// 保存促销码（码已存在时返回 Duplicate）
    async fn save(&self, promo_code: &PromoCodeRecord) -> Result<(), RepositoryError>;

    /// 根据码查找促销码
    async fn find_by_code(&self, code: &str) -> Result<Option<PromoCodeRecord>, RepositoryError>;

    /// 获取所有促销码
    async fn find_all(&self) -> Result<Vec<PromoCodeRecord>, RepositoryError>;

    /// 消耗一次使用次数
    ///
    /// 原子自增，仅当 total_usages < max_usages 时生效；
    /// 返回是否消耗成功。
    async fn increment_usages(&self, code: &str) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Purchase Repository
// ============================================================================

/// 购买记录实体（用于持久化）
#[derive(Debug, Clone)]
pub struct PurchaseRecord {
    pub id: Uuid,
    pub product_id: Uuid,
    pub regular_price: Decimal,
    pub discount: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// Purchase Repository Port
#[async_trait]
pub trait PurchaseRepositoryPort: Send + Sync {
    /// 保存购买记录
    async fn save(&self, purchase: &PurchaseRecord) -> Result<(), RepositoryError>;

    /// 获取销售行（购买记录连同商品货币），按购买时间排列
    async fn find_sales_lines(&self) -> Result<Vec<SalesLine>, RepositoryError>;
}
