pub mod home;
pub mod listings;

pub use home::home_page;
pub use listings::listings_content;
