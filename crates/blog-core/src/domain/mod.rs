//! Domain entities - the core business objects.

mod post;
mod validation;

pub use post::{Author, BlogPost, BlogPostChanges, NewBlogPost};
pub use validation::required;
