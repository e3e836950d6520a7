pub mod paging;

pub use paging::{GestureClassifier, GestureHost, GestureState, PageFlickListener, PagingConfig};
