use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type ProductId = i64;

/// Display metadata returned by the product catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// A cart line item. `amount` is the quantity held in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: i64,
}

impl Product {
    pub fn from_details(details: ProductDetails, amount: i64) -> Self {
        Self {
            id: details.id,
            title: details.title,
            price: details.price,
            image: details.image,
            amount,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * self.amount as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

/// Ordered line items, unique by product id, in order of first insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.items.iter().find(|item| item.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    pub fn amount_of(&self, product_id: ProductId) -> i64 {
        self.find(product_id).map(|item| item.amount).unwrap_or(0)
    }

    pub fn amounts(&self) -> HashMap<ProductId, i64> {
        self.items.iter().map(|item| (item.id, item.amount)).collect()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(Product::subtotal).sum()
    }

    /// Returns a copy with `product_id` set to `amount`, or `None` when absent.
    pub(crate) fn with_amount(&self, product_id: ProductId, amount: i64) -> Option<Cart> {
        if !self.contains(product_id) {
            return None;
        }
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == product_id {
                    Product {
                        amount,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Some(Cart { items })
    }

    pub(crate) fn with_item(&self, product: Product) -> Cart {
        let mut items = self.items.clone();
        items.push(product);
        Cart { items }
    }

    pub(crate) fn without(&self, product_id: ProductId) -> Option<Cart> {
        if !self.contains(product_id) {
            return None;
        }
        let items = self
            .items
            .iter()
            .filter(|item| item.id != product_id)
            .cloned()
            .collect();
        Some(Cart { items })
    }

    /// Checks the uniqueness and positive-amount invariants. Returns the first violation.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for item in &self.items {
            if item.amount < 1 {
                return Err(format!("product {} has amount {}", item.id, item.amount));
            }
            if !seen.insert(item.id) {
                return Err(format!("product {} appears more than once", item.id));
            }
        }
        Ok(())
    }
}

impl From<Vec<Product>> for Cart {
    fn from(items: Vec<Product>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
