use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Catalog product.
///
/// Only `id` means anything to the service; the remaining fields are stored
/// and returned as given, without validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned, `None` until first save
    #[serde(default)]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub image_url: Option<String>,
}

impl Product {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
