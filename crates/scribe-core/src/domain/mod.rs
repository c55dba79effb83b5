//! Domain entities - the core business objects.

mod author;
mod pagination;
mod post;

pub use author::{Author, NewAuthor};
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Pagination, Window};
pub use post::{NewPost, Post, PostStatus, UnknownStatus};
