//! Purchase Commands

use uuid::Uuid;

/// 记录购买命令
///
/// `code` 为空时按原价购买，不产生折扣。
#[derive(Debug, Clone)]
pub struct RecordPurchase {
    pub product_id: Uuid,
    pub code: Option<String>,
}
