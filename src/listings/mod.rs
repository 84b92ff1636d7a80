mod source;
mod source_error;
mod view;

pub use source::{ListingSource, SupabaseSource};
pub use source_error::{BackendError, FetchError};
pub use view::{ListingsView, ViewState, EMPTY_MESSAGE, FETCH_ERROR_MESSAGE, LOADING_MESSAGE};
