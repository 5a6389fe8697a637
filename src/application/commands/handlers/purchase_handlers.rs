//! Purchase Command Handlers

use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::RecordPurchase;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    ProductRepositoryPort, PromoCodeRepositoryPort, PurchaseRecord, PurchaseRepositoryPort,
};

/// 记录购买响应
#[derive(Debug, Clone)]
pub struct RecordPurchaseResponse {
    pub purchase_id: Uuid,
    pub regular_price: Decimal,
    pub discount: Decimal,
}

/// RecordPurchase Handler
///
/// 促销码可用时授予折扣并消耗一次使用次数；
/// 码不可用（过期、货币不符、次数用尽）时按原价落库，不消耗次数。
pub struct RecordPurchaseHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
    promo_code_repo: Arc<dyn PromoCodeRepositoryPort>,
    purchase_repo: Arc<dyn PurchaseRepositoryPort>,
}

impl RecordPurchaseHandler {
    pub fn new(
        product_repo: Arc<dyn ProductRepositoryPort>,
        promo_code_repo: Arc<dyn PromoCodeRepositoryPort>,
        purchase_repo: Arc<dyn PurchaseRepositoryPort>,
    ) -> Self {
        Self {
            product_repo,
            promo_code_repo,
            purchase_repo,
        }
    }

    pub async fn handle(
        &self,
        command: RecordPurchase,
    ) -> Result<RecordPurchaseResponse, ApplicationError> {
        let product = self
            .product_repo
            .find_by_id(command.product_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Product", command.product_id))?;

        let mut discount = Decimal::ZERO;

        if let Some(code) = &command.code {
            let promo_code = self
                .promo_code_repo
                .find_by_code(code)
                .await?
                .ok_or_else(|| ApplicationError::not_found("Promo code", code))?;

            let quote = promo_code
                .terms()
                .quote(product.price, &product.currency, Utc::now().date_naive());

            if let Some(warning) = quote.warning {
                tracing::warn!(
                    code = %promo_code.code,
                    product_id = %product.id,
                    warning = warning.message(),
                    "Promo code not applied"
                );
            } else if self.promo_code_repo.increment_usages(code).await? {
                discount = product.price - quote.discount_price;
            } else {
                // 两次读取之间名额刚好被用尽，按无折扣落库
                tracing::warn!(
                    code = %promo_code.code,
                    product_id = %product.id,
                    "Promo code exhausted before usage could be consumed"
                );
            }
        }

        let purchase = PurchaseRecord {
            id: Uuid::new_v4(),
            product_id: product.id,
            regular_price: product.price,
            discount,
            timestamp: Utc::now(),
        };

        self.purchase_repo.save(&purchase).await?;

        tracing::info!(
            purchase_id = %purchase.id,
            product_id = %product.id,
            discount = %discount,
            "Purchase recorded"
        );

        Ok(RecordPurchaseResponse {
            purchase_id: purchase.id,
            regular_price: purchase.regular_price,
            discount: purchase.discount,
        })
    }
}
