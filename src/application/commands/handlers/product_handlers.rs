//! Product Command Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{CreateProduct, UpdateProduct};
use crate::application::error::ApplicationError;
use crate::application::ports::{ProductRecord, ProductRepositoryPort};

// ============================================================================
// CreateProduct
// ============================================================================

/// 创建商品响应
#[derive(Debug, Clone)]
pub struct CreateProductResponse {
    pub id: Uuid,
}

/// CreateProduct Handler
pub struct CreateProductHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl CreateProductHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }

    pub async fn handle(
        &self,
        command: CreateProduct,
    ) -> Result<CreateProductResponse, ApplicationError> {
        command.validate()?;

        // 名称唯一性检查
        if self.product_repo.find_by_name(&command.name).await?.is_some() {
            return Err(ApplicationError::duplicate(
                "Product with given name already exists",
            ));
        }

        let product_id = Uuid::new_v4();
        let now = Utc::now();

        let product = ProductRecord {
            id: product_id,
            name: command.name.clone(),
            description: command.description,
            price: command.price,
            currency: command.currency,
            created_at: now,
            updated_at: now,
        };

        self.product_repo.save(&product).await?;

        tracing::info!(
            product_id = %product_id,
            name = %command.name,
            "Product created"
        );

        Ok(CreateProductResponse { id: product_id })
    }
}

// ============================================================================
// UpdateProduct
// ============================================================================

/// 更新商品响应
#[derive(Debug, Clone)]
pub struct UpdateProductResponse {
    pub id: Uuid,
}

/// UpdateProduct Handler
pub struct UpdateProductHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl UpdateProductHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }

    pub async fn handle(
        &self,
        command: UpdateProduct,
    ) -> Result<UpdateProductResponse, ApplicationError> {
        command.validate()?;

        let existing = self
            .product_repo
            .find_by_id(command.product_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Product", command.product_id))?;

        // 改名时检查新名称未被占用
        if command.name != existing.name
            && self.product_repo.find_by_name(&command.name).await?.is_some()
        {
            return Err(ApplicationError::duplicate(
                "Product with given name already exists",
            ));
        }

        let product = ProductRecord {
            id: existing.id,
            name: command.name,
            description: command.description,
            price: command.price,
            currency: command.currency,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.product_repo.save(&product).await?;

        tracing::info!(product_id = %product.id, "Product updated");

        Ok(UpdateProductResponse { id: product.id })
    }
}
