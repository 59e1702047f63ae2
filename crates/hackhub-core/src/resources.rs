//! Read-only resource library.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Link,
    Pdf,
    Github,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub kind: ResourceKind,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceLibrary {
    pub resources: Vec<Resource>,
}

impl ResourceLibrary {
    pub fn seeded() -> Self {
        fn resource(id: &str, title: &str, kind: ResourceKind, url: &str) -> Resource {
            Resource {
                id: id.into(),
                title: title.into(),
                kind,
                url: url.into(),
            }
        }

        Self {
            resources: vec![
                resource(
                    "r1",
                    "Hackathon Rulebook",
                    ResourceKind::Pdf,
                    "https://innohacks.dev/rulebook.pdf",
                ),
                resource(
                    "r2",
                    "Judging Criteria",
                    ResourceKind::Pdf,
                    "https://innohacks.dev/judging.pdf",
                ),
                resource(
                    "r3",
                    "Starter Templates",
                    ResourceKind::Github,
                    "https://github.com/innohacks/starters",
                ),
                resource(
                    "r4",
                    "Sponsor API Catalog",
                    ResourceKind::Link,
                    "https://innohacks.dev/sponsor-apis",
                ),
                resource(
                    "r5",
                    "Pitch Deck Template",
                    ResourceKind::Link,
                    "https://innohacks.dev/pitch-template",
                ),
            ],
        }
    }

    /// Case-insensitive search over resource titles.
    pub fn search(&self, query: &str) -> Vec<&Resource> {
        let query = query.to_lowercase();
        self.resources
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive() {
        let library = ResourceLibrary::seeded();
        assert_eq!(library.search("TEMPLATE").len(), 2);
        assert_eq!(library.search("rulebook").len(), 1);
        assert!(library.search("kubernetes").is_empty());
    }
}
