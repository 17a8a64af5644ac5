//! Fractal envelopes the panel wraps around every entity and collection.

use serde::{Deserialize, Serialize};

/// Single-entity envelope: `{ object, attributes, meta? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractalItem<T> {
    pub object: String,
    pub attributes: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResourceMeta>,
}

/// Collection envelope: `{ object, data, meta.pagination }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractalList<T> {
    pub object: String,
    pub data: Vec<FractalItem<T>>,
    pub meta: ListMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceMeta {
    pub resource: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMeta {
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub count: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub links: PaginationLinks,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}
