use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::models::catalog::{CatalogPage, CatalogQuery, Listable, SortKey};

pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Derives the visible page of a fully fetched catalog from query state.
#[derive(Debug, Clone, Copy)]
pub struct CatalogController {
    page_size: usize,
}

impl Default for CatalogController {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogController {
    pub fn new(page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        Self { page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Filter, sort and slice `items`. The requested page is clamped to
    /// `[1, total_pages]`; an empty result reports page 1 of 0.
    pub fn visible_page<T>(&self, items: &[T], query: &CatalogQuery) -> CatalogPage<T>
    where
        T: Listable + Clone,
    {
        let mut matched = filter_items(items, query);
        sort_items(&mut matched, query.sort_key);

        let total_items = matched.len();
        let total_pages = total_items.div_ceil(self.page_size);
        let page = query.page.clamp(1, total_pages.max(1));

        let items = matched
            .into_iter()
            .skip((page - 1) * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect();

        CatalogPage {
            items,
            page,
            total_pages,
            total_items,
            page_size: self.page_size,
        }
    }
}

/// Items passing both the category filter and the free-text search.
pub fn filter_items<'a, T: Listable>(items: &'a [T], query: &CatalogQuery) -> Vec<&'a T> {
    let needle = query.search_text.trim().to_lowercase();

    items
        .iter()
        .filter(|item| query.category.matches(item.category()))
        .filter(|item| needle.is_empty() || item.search_text().to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort by `key`, ties broken by id ascending.
pub fn sort_items<T: Listable>(items: &mut [&T], key: SortKey) {
    items.sort_by(|a, b| compare(*a, *b, key).then_with(|| a.sort_id().cmp(&b.sort_id())));
}

fn compare<T: Listable>(a: &T, b: &T, key: SortKey) -> Ordering {
    match key {
        SortKey::NameAsc => compare_names(a.name(), b.name()),
        SortKey::PriceAsc => a.price().total_cmp(&b.price()),
        SortKey::PriceDesc => b.price().total_cmp(&a.price()),
        SortKey::RatingDesc => b.rating().total_cmp(&a.rating()),
        SortKey::NewestFirst => compare_dates(a.published_at(), b.published_at(), true),
        SortKey::OldestFirst => compare_dates(a.published_at(), b.published_at(), false),
    }
}

// Case-folded first so "bali" and "Bali" sit together, then by raw text.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// Undated records go last in either direction.
fn compare_dates(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>, newest_first: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if newest_first => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
