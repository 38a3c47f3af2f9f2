//! Pagination types and traits

use crate::error::Result;

/// A single fetched page: the response on success, the fetch error otherwise
pub type Page<T> = Result<T>;

/// Implemented by every response that can be paginated
pub trait Pageable {
    /// URL of the next page, or `None` if this is the last one
    fn next_url(&self) -> Option<&str>;
}

impl<T: Pageable + ?Sized> Pageable for Box<T> {
    fn next_url(&self) -> Option<&str> {
        (**self).next_url()
    }
}

impl<T: Pageable + ?Sized> Pageable for std::sync::Arc<T> {
    fn next_url(&self) -> Option<&str> {
        (**self).next_url()
    }
}
