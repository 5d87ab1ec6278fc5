use serde::{Deserialize, Serialize};

use orderdesk_core::{Entity, Money, ProductId};

/// Product category.
///
/// The set of labels is open: anything other than the named variants is
/// carried verbatim in `Other`. Only `Premium` affects pricing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductCategory {
    Premium,
    Regular,
    Budget,
    Other(String),
}

impl ProductCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ProductCategory::Premium => "Premium",
            ProductCategory::Regular => "Regular",
            ProductCategory::Budget => "Budget",
            ProductCategory::Other(label) => label,
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, ProductCategory::Premium)
    }
}

impl From<String> for ProductCategory {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Premium" => ProductCategory::Premium,
            "Regular" => ProductCategory::Regular,
            "Budget" => ProductCategory::Budget,
            _ => ProductCategory::Other(label),
        }
    }
}

impl From<&str> for ProductCategory {
    fn from(label: &str) -> Self {
        ProductCategory::from(label.to_string())
    }
}

impl From<ProductCategory> for String {
    fn from(category: ProductCategory) -> Self {
        match category {
            ProductCategory::Other(label) => label,
            named => named.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalogue product.
///
/// Seeded at startup. The only runtime mutation is losing availability when
/// an order consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    available: bool,
    unit_price: Money,
    category: ProductCategory,
}

impl Product {
    /// Create an available product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Money,
        category: impl Into<ProductCategory>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            available: true,
            unit_price,
            category: category.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn category(&self) -> &ProductCategory {
        &self.category
    }

    /// Idempotent.
    pub fn mark_unavailable(&mut self) {
        self.available = false;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
