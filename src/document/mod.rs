//! Document handling: segmentation, pagination, the document model, and the
//! on-disk library.

pub mod library;
pub mod model;
pub mod paginate;
pub mod segment;

pub use library::Library;
pub use model::{ContentType, Document};
pub use paginate::{DEFAULT_WORDS_PER_PAGE, NO_CONTENT_PAGE, paginate};
