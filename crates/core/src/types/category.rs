//! Product categories.

use serde::{Deserialize, Deserializer, Serialize};

use super::Slug;

/// A product category.
///
/// Product projections dereference the category (`category->{name, slug}`),
/// while older documents store the category name inline. Both shapes
/// normalize here: an inline name doubles as its own slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    pub name: String,
    pub slug: Slug,
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>, slug: impl Into<Slug>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryRepr {
    Name(String),
    Reference { name: String, slug: Option<Slug> },
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match CategoryRepr::deserialize(deserializer)? {
            CategoryRepr::Name(name) => Self {
                slug: Slug::new(name.clone()),
                name,
            },
            CategoryRepr::Reference { name, slug } => Self {
                slug: slug.unwrap_or_else(|| Slug::new(name.clone())),
                name,
            },
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_name() {
        let category: Category = serde_json::from_str("\"Sarees\"").unwrap();
        assert_eq!(category, Category::new("Sarees", "Sarees"));
    }

    #[test]
    fn test_dereferenced_object() {
        let category: Category =
            serde_json::from_str(r#"{"name":"Dresses","slug":{"current":"dresses"}}"#).unwrap();
        assert_eq!(category.name, "Dresses");
        assert_eq!(category.slug, "dresses");
    }

    #[test]
    fn test_object_without_slug_uses_name() {
        let category: Category = serde_json::from_str(r#"{"name":"Sets"}"#).unwrap();
        assert_eq!(category.slug, "Sets");
    }
}
