//! Category index and post lookup
//!
//! All operations are linear scans; the post list is small and fixed at
//! startup.

use super::model::BlogPost;

/// Distinct categories across `posts`, in first-occurrence order
pub fn derive_categories(posts: &[BlogPost]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in posts.iter().flat_map(|p| &p.categories) {
        if !categories.contains(category) {
            categories.push(category.clone());
        }
    }
    categories
}

/// Posts tagged with `category`
///
/// A post is yielded once per matching entry in its category list, so a
/// post listing the same category twice appears twice.
pub fn posts_in_category<'a>(posts: &'a [BlogPost], category: &str) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .flat_map(|p| {
            p.categories
                .iter()
                .filter(move |c| c.as_str() == category)
                .map(move |_| p)
        })
        .collect()
}

/// The last post in load order identified by `id` (exact title or slug)
pub fn find_post<'a>(posts: &'a [BlogPost], id: &str) -> Option<&'a BlogPost> {
    posts.iter().rev().find(|p| p.is_identified_by(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, categories: &[&str]) -> BlogPost {
        BlogPost {
            title: title.to_string(),
            categories: categories.iter().map(ToString::to_string).collect(),
            ..BlogPost::default()
        }
    }

    #[test]
    fn test_categories_first_occurrence_order() {
        let posts = vec![
            post("a", &["web", "go"]),
            post("b", &["rust", "web"]),
            post("c", &["go", "rust", "misc"]),
        ];
        assert_eq!(derive_categories(&posts), vec!["web", "go", "rust", "misc"]);
    }

    #[test]
    fn test_categories_empty() {
        assert!(derive_categories(&[]).is_empty());
        assert!(derive_categories(&[post("a", &[])]).is_empty());
    }

    #[test]
    fn test_categories_repeated_within_post() {
        let posts = vec![post("a", &["go", "go", "web"])];
        assert_eq!(derive_categories(&posts), vec!["go", "web"]);
    }

    #[test]
    fn test_posts_in_category() {
        let posts = vec![post("Hello", &["go", "web"]), post("World", &["web"])];

        let web: Vec<_> = posts_in_category(&posts, "web")
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(web, vec!["Hello", "World"]);

        let go: Vec<_> = posts_in_category(&posts, "go")
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(go, vec!["Hello"]);

        assert!(posts_in_category(&posts, "rust").is_empty());
    }

    #[test]
    fn test_posts_in_category_keeps_repeated_entries() {
        let posts = vec![post("Twice", &["go", "go"]), post("Once", &["go"])];
        let titles: Vec<_> = posts_in_category(&posts, "go")
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Twice", "Twice", "Once"]);
    }

    #[test]
    fn test_find_post_last_match_wins() {
        let posts = vec![
            post("Hello", &["first"]),
            post("World", &[]),
            post("Hello", &["second"]),
        ];
        let found = find_post(&posts, "Hello").unwrap();
        assert_eq!(found.categories, vec!["second"]);
    }

    #[test]
    fn test_find_post_is_case_sensitive() {
        let posts = vec![post("Hello", &[])];
        assert!(find_post(&posts, "Hello").is_some());
        assert!(find_post(&posts, "hello").is_none());
        assert!(find_post(&posts, "").is_none());
    }

    #[test]
    fn test_find_post_by_slug() {
        let mut p = post("Hello, World!", &[]);
        p.slug = Some("hello-world".to_string());
        let posts = vec![p];
        assert_eq!(
            find_post(&posts, "hello-world").map(|p| p.title.as_str()),
            Some("Hello, World!")
        );
    }
}
