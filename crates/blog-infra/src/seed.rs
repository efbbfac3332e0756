//! Sample data for development databases and test setup.

use blog_core::domain::{Author, BlogPost, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

const FIRST_NAMES: &[&str] = &["Ada", "Grace", "Alan", "Barbara", "Edsger", "Margaret"];
const LAST_NAMES: &[&str] = &["Lovelace", "Hopper", "Turing", "Liskov", "Dijkstra", "Hamilton"];
const TOPICS: &[&str] = &["ownership", "lifetimes", "traits", "async", "macros", "testing"];

/// Build `count` distinct sample drafts. The output is deterministic.
pub fn sample_posts(count: usize) -> Vec<NewBlogPost> {
    (0..count)
        .map(|i| {
            let author = Author::new(
                FIRST_NAMES[i % FIRST_NAMES.len()],
                LAST_NAMES[(i / FIRST_NAMES.len() + i) % LAST_NAMES.len()],
            );
            let topic = TOPICS[i % TOPICS.len()];
            NewBlogPost::new(
                author,
                format!("Notes on {} #{}", topic, i + 1),
                format!("Post {} collects a few thoughts about {}.", i + 1, topic),
            )
        })
        .collect()
}

/// Bulk-insert `count` sample posts into `repo`.
pub async fn seed_posts(
    repo: &dyn PostRepository,
    count: usize,
) -> Result<Vec<BlogPost>, RepoError> {
    let posts = repo.insert_many(sample_posts(count)).await?;
    tracing::info!(count = posts.len(), "Seeded sample blog posts");
    Ok(posts)
}
