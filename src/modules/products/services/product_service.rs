use std::sync::Arc;

use tracing::info;

use crate::core::Result;
use crate::modules::products::models::Product;
use crate::modules::products::repositories::ProductStore;

/// Catalog CRUD. No validation or authorization happens here.
pub struct ProductService {
    products: Arc<ProductStore>,
}

impl ProductService {
    pub fn new(products: Arc<ProductStore>) -> Self {
        Self { products }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.products.find_all().await
    }

    /// Persist as a new product; an id in the body is ignored
    pub async fn create_product(&self, mut product: Product) -> Result<Product> {
        product.id = None;
        let created = self.products.save(product).await?;

        info!(product_id = ?created.id, "Created product");
        Ok(created)
    }

    /// Replace the product stored under `id`, creating it if absent.
    /// The path id always wins over the body id.
    pub async fn update_product(&self, id: i64, product: Product) -> Result<Product> {
        let updated = self.products.save(product.with_id(id)).await?;

        info!(product_id = id, "Updated product");
        Ok(updated)
    }

    /// Missing ids are not reported
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        self.products.delete_by_id(id).await?;

        info!(product_id = id, "Deleted product");
        Ok(())
    }
}
