use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// Author of a blog post. Both names are always present together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display name: first and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Blog post entity - the only resource of the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Apply a partial update. `id` and `created` are never touched.
    pub fn apply(&mut self, changes: BlogPostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
    }
}

/// A post that passed field validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub author: Author,
    pub title: String,
    pub content: String,
}

impl NewBlogPost {
    pub fn new(author: Author, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Assign identity and creation time. Called by stores on insert.
    ///
    /// `created` is truncated to microseconds, the finest precision every
    /// backend keeps, so the value returned on insert matches later reads.
    pub fn into_post(self) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            author: self.author,
            title: self.title,
            content: self.content,
            created: Utc::now().trunc_subsecs(6),
        }
    }
}

/// Field replacements for an existing post. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

impl BlogPostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewBlogPost {
        NewBlogPost::new(Author::new("Ada", "Lovelace"), "Notes", "On the engine")
    }

    #[test]
    fn test_full_name_joins_with_space() {
        assert_eq!(Author::new("Ada", "Lovelace").full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_into_post_assigns_unique_ids() {
        let a = draft().into_post();
        let b = draft().into_post();
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "Notes");
    }

    #[test]
    fn test_created_has_microsecond_precision() {
        let post = draft().into_post();
        assert_eq!(post.created.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn test_apply_replaces_only_supplied_fields() {
        let mut post = draft().into_post();
        let original = post.clone();

        post.apply(BlogPostChanges {
            title: Some("Revised".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "Revised");
        assert_eq!(post.content, original.content);
        assert_eq!(post.author, original.author);
        assert_eq!(post.id, original.id);
        assert_eq!(post.created, original.created);
    }

    #[test]
    fn test_apply_replaces_author_as_a_whole() {
        let mut post = draft().into_post();
        post.apply(BlogPostChanges {
            author: Some(Author::new("Charles", "Babbage")),
            ..Default::default()
        });
        assert_eq!(post.author.full_name(), "Charles Babbage");
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(BlogPostChanges::default().is_empty());
        let changes = BlogPostChanges {
            content: Some(String::new()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
