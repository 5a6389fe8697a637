//! Promo Code Queries

/// 获取促销码详情查询
#[derive(Debug, Clone)]
pub struct GetPromoCode {
    pub code: String,
}

/// 列出所有促销码查询
#[derive(Debug, Clone)]
pub struct ListPromoCodes;
