//! Product Commands

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::domain::catalog::{CurrencyCode, ProductName};

/// 创建商品命令
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub currency: String,
}

/// 更新商品命令
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub product_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub currency: String,
}

/// 商品字段校验，创建与更新共用
fn validate_product_fields(
    name: &str,
    price: Decimal,
    currency: &str,
) -> Result<(), ApplicationError> {
    ProductName::new(name).map_err(ApplicationError::validation)?;
    if price <= Decimal::ZERO {
        return Err(ApplicationError::validation(
            "Product price must be a positive number",
        ));
    }
    CurrencyCode::new(currency).map_err(ApplicationError::validation)?;
    Ok(())
}

impl CreateProduct {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        validate_product_fields(&self.name, self.price, &self.currency)
    }
}

impl UpdateProduct {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        validate_product_fields(&self.name, self.price, &self.currency)
    }
}
