//! Catalog query commands.

use clap::Args;
use tracing::info;

use maison_bonheur_core::{CategoryId, Price};
use maison_bonheur_storefront::catalog::{CatalogQuery, Pager, SortOption};
use maison_bonheur_storefront::config::StorefrontConfig;
use maison_bonheur_storefront::AppError;

/// Filters for a catalog listing.
#[derive(Args)]
pub struct CatalogArgs {
    #[arg(long)]
    category: Option<i64>,
    #[arg(long)]
    min_price: Option<Price>,
    #[arg(long)]
    max_price: Option<Price>,
    #[arg(long)]
    min_rating: Option<f64>,
    /// `price_asc`, `price_desc`, `popularity` or `new`
    #[arg(long)]
    sort: Option<SortOption>,
    /// Number of pages to print
    #[arg(long, default_value_t = 1)]
    pages: usize,
}

/// Print the catalog API URLs for the first pages of a listing.
pub fn urls(config: &StorefrontConfig, args: CatalogArgs) -> Result<(), AppError> {
    let defaults = CatalogQuery::default();
    let query = CatalogQuery {
        category_id: args.category.map(CategoryId::new),
        min_rating: args.min_rating,
        sort: args.sort,
        ..defaults.clone()
    }
    .with_price_range(
        args.min_price.unwrap_or(defaults.min_price),
        args.max_price.unwrap_or(defaults.max_price),
    );

    let mut pager = Pager::new(query);
    for page in 1..=args.pages {
        let Some(query) = pager.next_query() else {
            break;
        };
        let url = query
            .to_url(&config.catalog_url)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        info!(page, %url, "Catalog page");
        pager.advance(query.limit);
    }
    Ok(())
}
