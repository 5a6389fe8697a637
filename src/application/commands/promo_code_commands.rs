//! Promo Code Commands

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::application::error::ApplicationError;
use crate::domain::catalog::CurrencyCode;
use crate::domain::promotion::{Code, CodeType};

/// 创建促销码命令
#[derive(Debug, Clone)]
pub struct CreatePromoCode {
    pub code: String,
    pub expire_date: NaiveDate,
    pub max_usages: i64,
    pub amount: Decimal,
    pub currency: String,
    /// "QUANTITATIVE" 或 "PERCENTAGE"
    pub code_type: String,
}

impl CreatePromoCode {
    /// 校验命令并返回解析后的折扣类型
    pub fn validate(&self, today: NaiveDate) -> Result<CodeType, ApplicationError> {
        Code::new(self.code.as_str()).map_err(ApplicationError::validation)?;

        if self.expire_date <= today {
            return Err(ApplicationError::validation(
                "Promo code expiration date must be in the future",
            ));
        }
        if self.max_usages <= 0 {
            return Err(ApplicationError::validation(
                "Max number of promo code usages must be a positive number",
            ));
        }
        if self.amount <= Decimal::ZERO {
            return Err(ApplicationError::validation(
                "Discount amount must be a positive number",
            ));
        }
        CurrencyCode::new(self.currency.as_str()).map_err(ApplicationError::validation)?;

        CodeType::from_str(&self.code_type).ok_or_else(|| {
            ApplicationError::validation("Code type must be either 'QUANTITATIVE' or 'PERCENTAGE'")
        })
    }
}
