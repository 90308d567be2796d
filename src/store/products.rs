//! Product repository

use parking_lot::RwLock;
use validator::Validate;

use crate::domain::catalog::{self, CatalogPage, CatalogQuery};
use crate::domain::product::{Product, ProductInput};
use crate::{Result, StoreError};

#[derive(Default)]
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl ProductStore {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Runs the catalog pipeline under the read lock so only the requested
    /// page is cloned out.
    pub fn query(&self, query: &CatalogQuery) -> CatalogPage {
        catalog::run_query(&self.products.read(), query)
    }

    pub fn categories(&self) -> Vec<String> {
        catalog::categories(&self.products.read())
    }

    pub fn get(&self, id: &str) -> Result<Product> {
        self.products
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound("Product"))
    }

    pub fn insert(&self, input: ProductInput) -> Result<Product> {
        input.validate()?;
        let product = Product::new(input);
        self.products.write().push(product.clone());
        Ok(product)
    }

    pub fn update(&self, id: &str, input: ProductInput) -> Result<Product> {
        input.validate()?;
        let mut products = self.products.write();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound("Product"))?;
        product.apply(input);
        Ok(product.clone())
    }

    pub fn remove(&self, id: &str) -> Result<()> {
        let mut products = self.products.write();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(StoreError::NotFound("Product"));
        }
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.products.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::SizeOption;

    fn input(name: &str) -> ProductInput {
        ProductInput {
            name: name.into(),
            description: String::new(),
            price: 100_000,
            original_price: None,
            category: "tshirt".into(),
            images: vec![],
            sizes: vec![SizeOption { size: "M".into(), stock: 5 }],
        }
    }

    #[test]
    fn test_insert_get_update_remove() {
        let store = ProductStore::default();
        let created = store.insert(input("Tee")).unwrap();
        assert_eq!(store.count(), 1);
        assert_eq!(store.get(&created.id).unwrap().name, "Tee");

        let mut edit = input("Tee v2");
        edit.price = 90_000;
        let updated = store.update(&created.id, edit).unwrap();
        assert_eq!(updated.name, "Tee v2");
        assert_eq!(updated.price, 90_000);

        store.remove(&created.id).unwrap();
        assert!(matches!(store.get(&created.id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_insert_rejects_empty_name() {
        let store = ProductStore::default();
        let mut bad = input("");
        bad.name.clear();
        assert!(matches!(store.insert(bad), Err(StoreError::Validation(_))));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = ProductStore::default();
        assert!(matches!(store.get("nope"), Err(StoreError::NotFound(_))));
        assert!(matches!(
            store.update("nope", input("X")),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(store.remove("nope"), Err(StoreError::NotFound(_))));
    }
}
