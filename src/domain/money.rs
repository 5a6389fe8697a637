//! 金额处理
//!
//! 所有金额使用精确十进制表示，对外统一输出两位小数

use rust_decimal::{Decimal, RoundingStrategy};

/// 金额小数位数
const MONEY_SCALE: u32 = 2;

/// 将金额舍入到两位小数（中点远离零）
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// 将金额格式化为两位小数字符串，如 "7.50"
pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", round_money(amount))
}
