//! Catalog browsing: filter, sort and page perfumes.
//!
//! A [`CatalogQuery`] can either be rendered as a JSON-server URL for the
//! catalog API or applied directly to a slice of perfumes already in memory.
//! Both paths use the same semantics.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use url::Url;

use maison_bonheur_core::{CategoryId, Price};

use crate::models::Perfume;

/// Default lower bound of the price filter.
pub const DEFAULT_MIN_PRICE: u32 = 80;

/// Default upper bound of the price filter.
pub const DEFAULT_MAX_PRICE: u32 = 500;

/// Default page size.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Catalog sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    PriceAsc,
    PriceDesc,
    /// Highest rating first.
    Popularity,
    /// Newest (highest id) first.
    New,
}

impl SortOption {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Popularity => "popularity",
            Self::New => "new",
        }
    }

    /// JSON-server `_sort` field and `_order` direction.
    #[must_use]
    pub const fn sort_params(self) -> (&'static str, &'static str) {
        match self {
            Self::PriceAsc => ("price", "asc"),
            Self::PriceDesc => ("price", "desc"),
            Self::Popularity => ("rating", "desc"),
            Self::New => ("id", "desc"),
        }
    }

    fn compare(self, a: &Perfume, b: &Perfume) -> Ordering {
        match self {
            Self::PriceAsc => a.price.cmp(&b.price),
            Self::PriceDesc => b.price.cmp(&a.price),
            Self::Popularity => b.rating.total_cmp(&a.rating),
            Self::New => b.id.cmp(&a.id),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "popularity" => Ok(Self::Popularity),
            "new" => Ok(Self::New),
            other => Err(format!("unknown sort option: {other}")),
        }
    }
}

/// Filter, sort and paging parameters for a catalog listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub category_id: Option<CategoryId>,
    pub min_price: Price,
    pub max_price: Price,
    pub min_rating: Option<f64>,
    pub sort: Option<SortOption>,
    pub start: usize,
    pub limit: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category_id: None,
            min_price: Price::from_units(DEFAULT_MIN_PRICE),
            max_price: Price::from_units(DEFAULT_MAX_PRICE),
            min_rating: None,
            sort: None,
            start: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogQuery {
    /// Set the price range, swapping the bounds if they are reversed.
    #[must_use]
    pub fn with_price_range(mut self, min: Price, max: Price) -> Self {
        if min > max {
            self.min_price = max;
            self.max_price = min;
        } else {
            self.min_price = min;
            self.max_price = max;
        }
        self
    }

    /// The same query starting at another offset.
    #[must_use]
    pub fn at(&self, start: usize) -> Self {
        Self {
            start,
            ..self.clone()
        }
    }

    /// Listing URL on a JSON-server style catalog API.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` cannot be joined with the listing path.
    pub fn to_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        let mut url = base.join("perfumes")?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(category_id) = self.category_id {
                query.append_pair("category_id", &category_id.to_string());
            }
            query.append_pair("price_gte", &self.min_price.amount().normalize().to_string());
            query.append_pair("price_lte", &self.max_price.amount().normalize().to_string());
            if let Some(rating) = self.min_rating {
                query.append_pair("rating_gte", &rating.to_string());
            }
            if let Some(sort) = self.sort {
                let (field, order) = sort.sort_params();
                query.append_pair("_sort", field);
                query.append_pair("_order", order);
            }
            query.append_pair("_start", &self.start.to_string());
            query.append_pair("_limit", &self.limit.to_string());
        }
        Ok(url)
    }

    fn matches(&self, perfume: &Perfume) -> bool {
        self.category_id.is_none_or(|id| perfume.category_id == id)
            && perfume.price >= self.min_price
            && perfume.price <= self.max_price
            && self.min_rating.is_none_or(|rating| perfume.rating >= rating)
    }

    /// Filter, sort and page `perfumes` in memory.
    #[must_use]
    pub fn apply<'a>(&self, perfumes: &'a [Perfume]) -> Vec<&'a Perfume> {
        let mut matched: Vec<&Perfume> = perfumes.iter().filter(|p| self.matches(p)).collect();
        if let Some(sort) = self.sort {
            matched.sort_by(|a, b| sort.compare(a, b));
        }
        matched.into_iter().skip(self.start).take(self.limit).collect()
    }
}

/// Offset tracking for an infinitely scrolled listing.
#[derive(Debug, Clone)]
pub struct Pager {
    query: CatalogQuery,
    offset: usize,
    exhausted: bool,
}

impl Pager {
    /// Start paging `query` from its first record.
    #[must_use]
    pub fn new(query: CatalogQuery) -> Self {
        Self {
            offset: query.start,
            query,
            exhausted: false,
        }
    }

    /// Query for the next page, or `None` once an empty page was received.
    #[must_use]
    pub fn next_query(&self) -> Option<CatalogQuery> {
        (!self.exhausted).then(|| self.query.at(self.offset))
    }

    /// Record a received page of `count` records.
    pub fn advance(&mut self, count: usize) {
        if count == 0 {
            self.exhausted = true;
        } else {
            self.offset += count;
        }
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use maison_bonheur_core::PerfumeId;

    use super::*;

    fn perfume(id: i64, category: i64, price: u32, rating: f64) -> Perfume {
        Perfume {
            id: PerfumeId::new(id),
            name: format!("Parfum {id}"),
            description: String::new(),
            price: Price::from_units(price),
            image_url: String::new(),
            brand: "Maison Bonheur".to_string(),
            category_id: CategoryId::new(category),
            rating,
            stock: 10,
            is_featured: false,
            intensity: "Moyenne".to_string(),
            season: "Printemps".to_string(),
            mood: "Romantique".to_string(),
            created_at: "2025-01-01".to_string(),
            in_stock: None,
        }
    }

    fn shelf() -> Vec<Perfume> {
        vec![
            perfume(1, 1, 120, 4.5),
            perfume(2, 2, 90, 3.8),
            perfume(3, 1, 450, 4.9),
            perfume(4, 1, 60, 5.0),
            perfume(5, 2, 300, 4.1),
        ]
    }

    #[test]
    fn test_default_url() {
        let base = Url::parse("http://localhost:3000").unwrap();
        let url = CatalogQuery::default().to_url(&base).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/perfumes?price_gte=80&price_lte=500&_start=0&_limit=12"
        );
    }

    #[test]
    fn test_full_url() {
        let base = Url::parse("http://localhost:3000/").unwrap();
        let query = CatalogQuery {
            category_id: Some(CategoryId::new(2)),
            min_rating: Some(4.0),
            sort: Some(SortOption::Popularity),
            start: 24,
            ..CatalogQuery::default()
        };
        let url = query.to_url(&base).unwrap();
        assert_eq!(
            url.query(),
            Some(
                "category_id=2&price_gte=80&price_lte=500&rating_gte=4&_sort=rating&_order=desc&_start=24&_limit=12"
            )
        );
    }

    #[test]
    fn test_price_range_swapped() {
        let query = CatalogQuery::default()
            .with_price_range(Price::from_units(400), Price::from_units(100));
        assert_eq!(query.min_price, Price::from_units(100));
        assert_eq!(query.max_price, Price::from_units(400));
    }

    #[test]
    fn test_apply_filters() {
        let perfumes = shelf();
        let ids = |query: &CatalogQuery| -> Vec<i64> {
            query.apply(&perfumes).iter().map(|p| p.id.as_i64()).collect()
        };

        // Default range excludes the 60 DT perfume.
        assert_eq!(ids(&CatalogQuery::default()), vec![1, 2, 3, 5]);

        let category = CatalogQuery {
            category_id: Some(CategoryId::new(1)),
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&category), vec![1, 3]);

        let rated = CatalogQuery {
            min_rating: Some(4.2),
            ..CatalogQuery::default()
        };
        assert_eq!(ids(&rated), vec![1, 3]);
    }

    #[test]
    fn test_apply_sorts_and_pages() {
        let perfumes = shelf();
        let ids = |query: CatalogQuery| -> Vec<i64> {
            query.apply(&perfumes).iter().map(|p| p.id.as_i64()).collect()
        };
        let sorted = |sort| CatalogQuery {
            sort: Some(sort),
            ..CatalogQuery::default()
        };

        assert_eq!(ids(sorted(SortOption::PriceAsc)), vec![2, 1, 5, 3]);
        assert_eq!(ids(sorted(SortOption::PriceDesc)), vec![3, 5, 1, 2]);
        assert_eq!(ids(sorted(SortOption::Popularity)), vec![3, 1, 5, 2]);
        assert_eq!(ids(sorted(SortOption::New)), vec![5, 3, 2, 1]);

        let page = CatalogQuery {
            start: 1,
            limit: 2,
            ..sorted(SortOption::PriceAsc)
        };
        assert_eq!(ids(page), vec![1, 5]);
    }

    #[test]
    fn test_pager_stops_on_empty_page() {
        let perfumes = shelf();
        let mut pager = Pager::new(CatalogQuery {
            limit: 3,
            ..CatalogQuery::default()
        });

        let mut seen = Vec::new();
        while let Some(query) = pager.next_query() {
            let page = query.apply(&perfumes);
            seen.extend(page.iter().map(|p| p.id.as_i64()));
            pager.advance(page.len());
        }

        assert_eq!(seen, vec![1, 2, 3, 5]);
        assert_eq!(pager.offset(), 4);
        assert!(pager.is_exhausted());
    }

    #[test]
    fn test_sort_option_parse() {
        assert_eq!("new".parse::<SortOption>().unwrap(), SortOption::New);
        assert!("cheapest".parse::<SortOption>().is_err());
    }
}
