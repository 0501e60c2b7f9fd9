//! Content types decoded from the site's JSON files.

use serde::{Deserialize, Serialize};

/// A named hyperlink, used for navigation and social links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// Contents of `links.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLinks {
    pub nav: Vec<Link>,
    pub socials: Vec<Link>,
}

/// One entry of `blog.json`
///
/// Missing fields decode as empty values. `title` identifies the post in
/// `/blog/post/{post}` URLs; an explicit `slug` may be given as a URL-safe
/// alternative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub title: String,
    pub subheading: String,
    pub date: String,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl BlogPost {
    /// Whether `id`, taken from a request path, refers to this post
    pub fn is_identified_by(&self, id: &str) -> bool {
        self.title == id || self.slug.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let post: BlogPost = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        assert_eq!(post.title, "Hello");
        assert!(post.subheading.is_empty());
        assert!(post.categories.is_empty());
        assert_eq!(post.slug, None);
    }

    #[test]
    fn test_identified_by_title_or_slug() {
        let post = BlogPost {
            title: "Hello World".to_string(),
            slug: Some("hello-world".to_string()),
            ..BlogPost::default()
        };
        assert!(post.is_identified_by("Hello World"));
        assert!(post.is_identified_by("hello-world"));
        assert!(!post.is_identified_by("hello world"));
    }

    #[test]
    fn test_serialized_fields_survive_reload() {
        let json = r#"{"title":"Hello","subheading":"first","date":"2024-01-02","categories":["go","web"]}"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value, serde_json::from_str::<serde_json::Value>(json).unwrap());

        let again: BlogPost = serde_json::from_value(value).unwrap();
        assert_eq!(again, post);
    }

    #[test]
    fn test_nav_links_round_trip() {
        let json = r#"{"nav":[{"name":"Home","url":"/"}],"socials":[{"name":"GitHub","url":"https://github.com/"}]}"#;
        let links: NavLinks = serde_json::from_str(json).unwrap();
        assert_eq!(links.nav[0].name, "Home");
        assert_eq!(links.socials[0].url, "https://github.com/");

        let out = serde_json::to_string(&links).unwrap();
        assert_eq!(serde_json::from_str::<NavLinks>(&out).unwrap(), links);
    }
}
