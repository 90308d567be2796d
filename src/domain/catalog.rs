//! Catalog queries: filter, sort, paginate.
//!
//! The pipeline order is fixed: category, then search, then sort, then
//! pagination. Out-of-range pages return an empty slice, never an error.

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

const DEFAULT_LIMIT: u32 = 12;
const MAX_LIMIT: u32 = 100;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub products: Vec<Product>,
    pub total: usize,
    pub pages: usize,
    pub current_page: u32,
}

pub fn run_query(products: &[Product], query: &CatalogQuery) -> CatalogPage {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let mut matched: Vec<&Product> = products
        .iter()
        .filter(|p| match &query.category {
            Some(category) => p.category == *category,
            None => true,
        })
        .filter(|p| match &query.search {
            Some(search) => {
                let needle = search.to_lowercase();
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            }
            None => true,
        })
        .collect();

    match query.sort {
        Some(SortKey::PriceAsc) => matched.sort_by_key(|p| p.price),
        Some(SortKey::PriceDesc) => matched.sort_by_key(|p| std::cmp::Reverse(p.price)),
        Some(SortKey::NameAsc) => matched.sort_by(|a, b| a.name.cmp(&b.name)),
        Some(SortKey::NameDesc) => matched.sort_by(|a, b| b.name.cmp(&a.name)),
        None => {}
    }

    let total = matched.len();
    let pages = total.div_ceil(limit as usize);
    let start = (u64::from(page) - 1) * u64::from(limit);
    let items = matched
        .into_iter()
        .skip(start as usize)
        .take(limit as usize)
        .cloned()
        .collect();

    CatalogPage {
        products: items,
        total,
        pages,
        current_page: page,
    }
}

/// Distinct categories over the product set, sorted.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}
