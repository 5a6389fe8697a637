//! Sales Context - 销售汇总
//!
//! 按货币维度聚合购买记录，货币顺序与首次出现顺序一致。

use rust_decimal::Decimal;

/// 单笔销售行: 商品货币 + 原价 + 已授予折扣
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesLine {
    pub currency: String,
    pub regular_price: Decimal,
    pub discount: Decimal,
}

/// 某一货币下的销售汇总
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencySales {
    pub currency: String,
    /// 实收总额 = Σ(原价 - 折扣)
    pub total_amount: Decimal,
    /// 折扣总额
    pub total_discount: Decimal,
    pub purchase_count: u64,
}

/// 按货币聚合销售行
pub fn summarize_by_currency(lines: &[SalesLine]) -> Vec<CurrencySales> {
    let mut report: Vec<CurrencySales> = Vec::new();

    for line in lines {
        let entry = match report.iter_mut().find(|s| s.currency == line.currency) {
            Some(entry) => entry,
            None => {
                report.push(CurrencySales {
                    currency: line.currency.clone(),
                    total_amount: Decimal::ZERO,
                    total_discount: Decimal::ZERO,
                    purchase_count: 0,
                });
                report.last_mut().unwrap()
            }
        };

        entry.total_amount += line.regular_price - line.discount;
        entry.total_discount += line.discount;
        entry.purchase_count += 1;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(currency: &str, regular_price: Decimal, discount: Decimal) -> SalesLine {
        SalesLine {
            currency: currency.to_string(),
            regular_price,
            discount,
        }
    }

    #[test]
    fn test_empty_input_gives_empty_report() {
        assert!(summarize_by_currency(&[]).is_empty());
    }

    #[test]
    fn test_single_currency_sums_amount_and_discount() {
        let lines = vec![
            line("USD", dec!(10.00), dec!(2.50)),
            line("USD", dec!(5.00), dec!(0.00)),
        ];
        let report = summarize_by_currency(&lines);

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].currency, "USD");
        assert_eq!(report[0].total_amount, dec!(12.50));
        assert_eq!(report[0].total_discount, dec!(2.50));
        assert_eq!(report[0].purchase_count, 2);
    }

    #[test]
    fn test_currencies_grouped_in_first_seen_order() {
        let lines = vec![
            line("PLN", dec!(100.00), dec!(0.00)),
            line("USD", dec!(10.00), dec!(1.00)),
            line("PLN", dec!(50.00), dec!(5.00)),
        ];
        let report = summarize_by_currency(&lines);

        assert_eq!(report.len(), 2);
        assert_eq!(report[0].currency, "PLN");
        assert_eq!(report[0].total_amount, dec!(145.00));
        assert_eq!(report[0].total_discount, dec!(5.00));
        assert_eq!(report[0].purchase_count, 2);
        assert_eq!(report[1].currency, "USD");
        assert_eq!(report[1].total_amount, dec!(9.00));
        assert_eq!(report[1].purchase_count, 1);
    }
}
