//! Catalog Context - 商品目录值对象

use serde::{Deserialize, Serialize};

/// 商品名称
///
/// 不变量: 非空白，且在商品目录内唯一（唯一性由仓储保证）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Product name cannot be blank");
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 货币代码
///
/// 不变量: 三个大写 ASCII 字母 (ISO 4217)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Result<Self, &'static str> {
        let code = code.into();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err("Currency must be a 3-letter ISO 4217 code");
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_name_rejects_blank() {
        assert!(ProductName::new("").is_err());
        assert!(ProductName::new("   ").is_err());
        assert!(ProductName::new("Laptop").is_ok());
    }

    #[test]
    fn test_currency_code_requires_three_uppercase_letters() {
        assert!(CurrencyCode::new("USD").is_ok());
        assert!(CurrencyCode::new("usd").is_err());
        assert!(CurrencyCode::new("US").is_err());
        assert!(CurrencyCode::new("USDT").is_err());
        assert!(CurrencyCode::new("U$D").is_err());
    }
}
