//! Read services used by page rendering code

mod detail;
mod listing;

pub use detail::DetailService;
pub use listing::{compare_by_date_desc, sort_by_date_desc, ListingService};
