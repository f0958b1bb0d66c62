//! Aggregate statistics over a blog collection snapshot.
//!
//! These functions are pure and independent of the store so they can be
//! reused outside any request context (batch reporting, CLI tooling).

use std::collections::HashMap;

use serde::Serialize;

/// Store-independent view of a blog, as consumed by the aggregate
/// functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogSnapshot {
    pub title: String,
    pub author: String,
    pub likes: i32,
}

/// The most-liked blog in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: String,
    pub likes: i32,
}

/// The author with the most blogs in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct TopAuthor {
    pub author: String,
    pub count: usize,
}

/// Sum of likes across the collection. Zero for empty input.
pub fn total_likes(blogs: &[BlogSnapshot]) -> i64 {
    blogs.iter().map(|b| i64::from(b.likes)).sum()
}

/// The blog with the maximum likes, or `None` for empty input.
///
/// On equal likes the earliest blog in input order wins. Note that
/// `Iterator::max_by_key` keeps the *last* maximum, so the scan compares
/// explicitly.
pub fn favorite_blog(blogs: &[BlogSnapshot]) -> Option<FavoriteBlog> {
    let mut best: Option<&BlogSnapshot> = None;
    for blog in blogs {
        match best {
            Some(current) if current.likes >= blog.likes => {}
            _ => best = Some(blog),
        }
    }

    best.map(|b| FavoriteBlog {
        title: b.title.clone(),
        author: b.author.clone(),
        likes: b.likes,
    })
}

/// The author appearing most frequently, or `None` for empty input.
///
/// Authors are grouped by exact string equality. Ties break to the author
/// whose first blog appears earliest in input order.
pub fn most_blogs(blogs: &[BlogSnapshot]) -> Option<TopAuthor> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for blog in blogs {
        *counts.entry(blog.author.as_str()).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    let mut seen: Vec<&str> = Vec::new();
    for blog in blogs {
        let author = blog.author.as_str();
        if seen.contains(&author) {
            continue;
        }
        seen.push(author);

        let count = counts[author];
        match best {
            Some((_, c)) if c >= count => {}
            _ => best = Some((author, count)),
        }
    }

    best.map(|(author, count)| TopAuthor {
        author: author.to_string(),
        count,
    })
}
