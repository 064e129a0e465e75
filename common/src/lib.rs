//! Shared pieces of the BBCars showroom: the compiled-in catalog, language
//! tables, the inventory query engine, the route table and the SEO metadata
//! synchronizer. Both the Yew frontend and the axum backend build on this.

pub mod catalog;
pub mod contact;
pub mod i18n;
pub mod lang;
pub mod leads;
pub mod price;
pub mod query;
pub mod routes;
pub mod seo;

pub use catalog::{Article, Catalog, Localized, Vehicle};
pub use lang::Language;
pub use query::{Criteria, SortMode};
pub use routes::{Page, Resolution};

/// Brand name used in titles, structured data and the footer.
pub const SITE_NAME: &str = "BBCars";
