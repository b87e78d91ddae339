//! In-memory, position-addressed product registry.
//!
//! A record's index is its only external identifier. Indices are not stable:
//! deleting position `i` shifts every later record down by one.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_core::{DomainError, DomainResult};

use crate::product::Product;

/// Acknowledgment returned by a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductAck {
    Created { name: String },
    Updated { name: String },
    Deleted { name: String },
}

impl ProductAck {
    pub fn name(&self) -> &str {
        match self {
            ProductAck::Created { name }
            | ProductAck::Updated { name }
            | ProductAck::Deleted { name } => name,
        }
    }
}

impl core::fmt::Display for ProductAck {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProductAck::Created { name } => write!(f, "Product {name} created successfully!"),
            ProductAck::Updated { name } => write!(f, "Product {name} updated successfully!"),
            ProductAck::Deleted { name } => write!(f, "Product {name} deleted successfully!"),
        }
    }
}

/// Ordered product collection.
///
/// All mutations take the single write lock, so concurrent deletes cannot
/// interleave their index shifts.
#[derive(Debug, Default)]
pub struct ProductRegistry {
    inner: RwLock<Vec<Product>>,
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Records are plain values; a panic mid-write cannot leave one half-built.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `product`. Duplicates are allowed.
    pub fn create(&self, product: Product) -> ProductAck {
        let name = product.name().to_string();
        let mut products = self.write();
        products.push(product);
        tracing::info!(index = products.len() - 1, name = %name, "product created");
        ProductAck::Created { name }
    }

    /// Snapshot of every record in order. Mutating it does not touch the registry.
    pub fn list_all(&self) -> Vec<Product> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Replaces the record at `index` in place.
    pub fn update_at(&self, index: usize, product: Product) -> DomainResult<ProductAck> {
        let mut products = self.write();
        let Some(slot) = products.get_mut(index) else {
            tracing::debug!(index, "update target not found");
            return Err(DomainError::not_found());
        };
        let name = product.name().to_string();
        *slot = product;
        tracing::info!(index, name = %name, "product updated");
        Ok(ProductAck::Updated { name })
    }

    /// Removes the record at `index`, shifting later records down by one.
    pub fn delete_at(&self, index: usize) -> DomainResult<ProductAck> {
        let mut products = self.write();
        if index >= products.len() {
            tracing::debug!(index, "delete target not found");
            return Err(DomainError::not_found());
        }
        let removed = products.remove(index);
        tracing::info!(index, name = %removed.name(), "product deleted");
        Ok(ProductAck::Deleted {
            name: removed.name().to_string(),
        })
    }
}
