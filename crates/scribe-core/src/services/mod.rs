//! Application services - validation, composition, and persistence wired
//! together behind the ports.

mod authors;
mod posts;

pub use authors::{AUTHOR_ROLE, AuthorService};
pub use posts::PostService;
