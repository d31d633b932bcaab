//! Product catalog types.
//!
//! Upstream catalogs disagree on field names (`title` vs `name`, a bare
//! array vs `{ "recipes": [...] }`), so a [`Product`] keeps every field it
//! was given and a [`ProductSchema`] decides which ones the UI reads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::fetch::FetchError;

/// Identifier of a product as the upstream catalog spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(id) => write!(f, "{}", id),
            ProductId::Text(id) => f.write_str(id),
        }
    }
}

/// A catalog entry. Everything except `id` is carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Which upstream fields hold the values the UI displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSchema {
    /// Key of the product list inside the response object.
    /// `None` means the response body is the list itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_key: Option<String>,
    pub title_field: String,
    pub price_field: String,
    pub image_field: String,
    pub rating_field: String,
}

impl Default for ProductSchema {
    fn default() -> Self {
        Self {
            collection_key: None,
            title_field: "title".to_string(),
            price_field: "price".to_string(),
            image_field: "image".to_string(),
            rating_field: "rating".to_string(),
        }
    }
}

impl ProductSchema {
    pub fn title<'a>(&self, product: &'a Product) -> Option<&'a str> {
        product.field(&self.title_field).and_then(Value::as_str)
    }

    /// Title for display; products without one are shown by id.
    pub fn display_title(&self, product: &Product) -> String {
        match self.title(product) {
            Some(title) => title.to_string(),
            None => format!("#{}", product.id),
        }
    }

    pub fn price(&self, product: &Product) -> Option<f64> {
        product.field(&self.price_field).and_then(Value::as_f64)
    }

    pub fn image<'a>(&self, product: &'a Product) -> Option<&'a str> {
        product.field(&self.image_field).and_then(Value::as_str)
    }

    /// Accepts both a plain number and the `{ "rate": 4.1, "count": 120 }` shape.
    pub fn rating(&self, product: &Product) -> Option<f64> {
        let value = product.field(&self.rating_field)?;
        value
            .as_f64()
            .or_else(|| value.get("rate").and_then(Value::as_f64))
    }

    /// Extract the product list from a decoded response body.
    pub fn extract(&self, body: Value) -> Result<Vec<Product>, FetchError> {
        let list = match &self.collection_key {
            Some(key) => match body {
                Value::Object(mut object) => object.remove(key).ok_or_else(|| {
                    FetchError::Parse(format!("missing collection key '{}'", key))
                })?,
                _ => {
                    return Err(FetchError::Parse(format!(
                        "expected an object holding '{}'",
                        key
                    )))
                }
            },
            None => body,
        };
        serde_json::from_value(list).map_err(|err| FetchError::Parse(err.to_string()))
    }

    /// Parse a raw catalog response body.
    pub fn parse(&self, body: &[u8]) -> Result<Vec<Product>, FetchError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|err| FetchError::Parse(err.to_string()))?;
        self.extract(value)
    }
}
