//! Pure presentation derivations for the fruits dashboard.
//!
//! Everything in here is a function of one record (or one scalar) and has no
//! side effects, so views can call them per row while rendering.

pub mod color;
pub mod country_flag;
pub mod date;
pub mod error;
pub mod rating;
pub mod status;
pub mod summary;
pub mod text;

pub use color::{Rgb, parse_css_color};
pub use country_flag::{CountryFlag, country_flag, resolve_code};
pub use date::{created_at_millis, format_date_added};
pub use error::DomainError;
pub use rating::StarRating;
pub use status::StatusKind;
pub use summary::{NutritionSummary, SupplierSummary};
pub use text::{capitalize_words, format_number, format_price_per_kg};
