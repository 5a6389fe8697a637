//! Purchase Queries

/// 按货币汇总的销售报表查询
#[derive(Debug, Clone)]
pub struct GetSalesReport;
