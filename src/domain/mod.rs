pub mod format;
pub mod listing;

pub use format::ListingCard;
pub use listing::Listing;
