//! Product Queries

use uuid::Uuid;

/// 列出所有商品查询
#[derive(Debug, Clone)]
pub struct ListProducts;

/// 商品折扣价查询
#[derive(Debug, Clone)]
pub struct GetProductDiscountPrice {
    pub product_id: Uuid,
    pub code: String,
}
