use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Repository, Result};
use crate::modules::products::models::Product;

/// Persistence seam for products
pub type ProductStore = dyn Repository<Product, i64>;

/// MySQL-backed product store
#[derive(Clone)]
pub struct MySqlProductStore {
    pool: MySqlPool,
}

impl MySqlProductStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, product: Product) -> Result<Product> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, stock, image_url)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.image_url)
        .execute(&self.pool)
        .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| AppError::internal("Product id out of range"))?;

        self.fetch(id).await
    }

    /// Full replace of the row with this id, inserting it if absent
    async fn upsert(&self, id: i64, product: Product) -> Result<Product> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, stock, image_url)
            VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                name = VALUES(name),
                description = VALUES(description),
                price = VALUES(price),
                stock = VALUES(stock),
                image_url = VALUES(image_url)
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.image_url)
        .execute(&self.pool)
        .await?;

        self.fetch(id).await
    }

    /// Row as stored, so callers see the column's rounding of `price`
    async fn fetch(&self, id: i64) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, stock, image_url
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }
}

#[async_trait]
impl Repository<Product, i64> for MySqlProductStore {
    async fn find_all(&self) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, stock, image_url
            FROM products
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn save(&self, product: Product) -> Result<Product> {
        match product.id {
            Some(id) => self.upsert(id, product).await,
            None => self.insert(product).await,
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
