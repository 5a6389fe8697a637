//! Promotion Context - 促销码与折扣规则
//!
//! 折扣核算是纯函数: 给定促销条款、商品价格与当前日期，
//! 输出折扣价或带警告的原价。

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::round_money;

/// 促销码文本
///
/// 不变量: 3-24 个字母或数字，区分大小写
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code(String);

impl Code {
    pub fn new(code: impl Into<String>) -> Result<Self, &'static str> {
        let code = code.into();
        if code.len() < 3 || code.len() > 24 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("Promo code must be a text of 3 to 24 alphanumeric case-sensitive characters");
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 折扣类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeType {
    /// 固定金额折扣
    Quantitative,
    /// 按价格百分比折扣
    Percentage,
}

impl CodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quantitative => "QUANTITATIVE",
            Self::Percentage => "PERCENTAGE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "QUANTITATIVE" => Some(Self::Quantitative),
            "PERCENTAGE" => Some(Self::Percentage),
            _ => None,
        }
    }
}

/// 促销码不可用的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteWarning {
    /// 已过有效期
    Expired,
    /// 货币与商品价格货币不一致
    CurrencyMismatch,
    /// 可用次数已用尽
    UsagesExhausted,
}

impl QuoteWarning {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Expired => "Promo code usage time expired",
            Self::CurrencyMismatch => "Promo code currency does not match product price currency",
            Self::UsagesExhausted => "The number of possible uses of the promo code has been exhausted",
        }
    }
}

/// 促销条款 - 折扣核算所需的促销码快照
#[derive(Debug, Clone)]
pub struct PromoTerms {
    pub expire_date: NaiveDate,
    pub max_usages: i64,
    pub total_usages: i64,
    pub amount: Decimal,
    pub currency: String,
    pub code_type: CodeType,
}

/// 折扣核算结果
///
/// 带警告时 `discount_price` 回落为原价，购买不消耗使用次数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountQuote {
    /// 折后价，已舍入到两位小数
    pub discount_price: Decimal,
    pub warning: Option<QuoteWarning>,
}

impl PromoTerms {
    /// 核算折扣价
    ///
    /// 检查顺序: 有效期 -> 货币一致 -> 剩余次数。
    /// 折扣价向下以零为界。
    pub fn quote(&self, price: Decimal, price_currency: &str, today: NaiveDate) -> DiscountQuote {
        if let Some(warning) = self.availability(price_currency, today) {
            return DiscountQuote {
                discount_price: round_money(price),
                warning: Some(warning),
            };
        }

        let mut discounted = match self.code_type {
            CodeType::Quantitative => price - self.amount,
            CodeType::Percentage => price - price * self.amount / Decimal::ONE_HUNDRED,
        };

        if discounted < Decimal::ZERO {
            discounted = Decimal::ZERO;
        }

        DiscountQuote {
            discount_price: round_money(discounted),
            warning: None,
        }
    }

    fn availability(&self, price_currency: &str, today: NaiveDate) -> Option<QuoteWarning> {
        if self.expire_date < today {
            return Some(QuoteWarning::Expired);
        }
        if self.currency != price_currency {
            return Some(QuoteWarning::CurrencyMismatch);
        }
        if self.total_usages >= self.max_usages {
            return Some(QuoteWarning::UsagesExhausted);
        }
        None
    }
}
