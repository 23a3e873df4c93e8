use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fields the catalog list controller reads from a record.
pub trait Listable {
    fn sort_id(&self) -> Option<ObjectId>;
    fn name(&self) -> &str;
    fn price(&self) -> f64;
    fn category(&self) -> &str;
    fn rating(&self) -> f64;
    fn published_at(&self) -> Option<DateTime<Utc>>;

    /// Text the free-text search matches against. Defaults to the name.
    fn search_text(&self) -> String {
        self.name().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `ALL` (any case) and the empty string both mean no filtering.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(trimmed.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category.trim().to_lowercase() == wanted.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    NewestFirst,
    OldestFirst,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::NameAsc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::NewestFirst,
        SortKey::OldestFirst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::NewestFirst => "newest",
            SortKey::OldestFirst => "oldest",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort key `{}`", self.0)
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Transient query state of one catalog page.
///
/// Changing the search text, category or sort key always sends the
/// query back to the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search_text: String,
    pub category: CategoryFilter,
    pub sort_key: SortKey,
    pub page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: CategoryFilter::All,
            sort_key: SortKey::default(),
            page: 1,
        }
    }
}

impl CatalogQuery {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self.page = 1;
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self.page = 1;
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self.page = 1;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/*
    ?search=&category=&sort=&page=&page_size=
*/
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl CatalogParams {
    pub fn to_query(&self) -> Result<CatalogQuery, UnknownSortKey> {
        let sort_key = match self.sort.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => SortKey::default(),
        };

        Ok(CatalogQuery::default()
            .with_search(self.search.clone().unwrap_or_default())
            .with_category(CategoryFilter::parse(self.category.as_deref().unwrap_or("")))
            .with_sort(sort_key)
            .with_page(self.page.unwrap_or(1)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}
