//! Curated learning resources per skill.
//!
//! An in-process map of high-quality links for common tech skills, with a
//! generic search-link fallback for anything else. A search API or a curated
//! table in the database could replace this later.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
}

impl Resource {
    fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

/// Returns curated learning links for a skill, or a generic search fallback.
/// Lookup is case-insensitive on the trimmed skill name.
pub fn find_resources(skill: &str) -> Vec<Resource> {
    match skill.trim().to_lowercase().as_str() {
        "react" => vec![
            Resource::new("Official React Documentation", "https://react.dev/"),
            Resource::new("Kent C. Dodds - Epic React", "https://epicreact.dev/"),
            Resource::new(
                "FreeCodeCamp - React Course",
                "https://www.youtube.com/watch?v=bMknfKXIFA8",
            ),
        ],
        "node" => vec![
            Resource::new("Node.js Documentation", "https://nodejs.org/en/docs/"),
            Resource::new(
                "MDN - Express/Node tutorial",
                "https://developer.mozilla.org/en-US/docs/Learn/Server-side/Express_Nodejs",
            ),
            Resource::new(
                "Node.js Best Practices",
                "https://github.com/goldbergyoni/nodebestpractices",
            ),
        ],
        "python" => vec![
            Resource::new(
                "Official Python Tutorial",
                "https://docs.python.org/3/tutorial/",
            ),
            Resource::new("Real Python", "https://realpython.com/"),
            Resource::new(
                "Python for Beginners (YouTube)",
                "https://www.youtube.com/watch?v=_uQrJ0TkZlc",
            ),
        ],
        "typescript" => vec![
            Resource::new(
                "TypeScript Handbook",
                "https://www.typescriptlang.org/docs/handbook/intro.html",
            ),
            Resource::new("Total TypeScript", "https://www.totaltypescript.com/"),
        ],
        "docker" => vec![
            Resource::new("Docker Get Started", "https://docs.docker.com/get-started/"),
            Resource::new(
                "Docker Tutorial for Beginners",
                "https://www.youtube.com/watch?v=pg19Z8LL06w",
            ),
        ],
        "kubernetes" => vec![
            Resource::new(
                "Kubernetes Basics",
                "https://kubernetes.io/docs/tutorials/kubernetes-basics/",
            ),
            Resource::new(
                "Nana - Kubernetes Tutorial",
                "https://www.youtube.com/watch?v=X48VuDVv0do",
            ),
        ],
        "nextjs" => vec![
            Resource::new("Next.js Documentation", "https://nextjs.org/docs"),
            Resource::new("Next.js Learn", "https://nextjs.org/learn"),
        ],
        _ => vec![
            Resource::new(
                &format!("Search for {skill} on MDN"),
                &format!("https://developer.mozilla.org/en-US/search?q={skill}"),
            ),
            Resource::new(
                &format!("{skill} Official Website"),
                &format!("https://www.google.com/search?q={skill}+official+site"),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_skill_returns_curated_links() {
        let resources = find_resources("react");
        assert_eq!(resources.len(), 3);
        assert_eq!(resources[0].url, "https://react.dev/");
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trimmed() {
        let resources = find_resources("  Kubernetes ");
        assert_eq!(
            resources[0].url,
            "https://kubernetes.io/docs/tutorials/kubernetes-basics/"
        );
    }

    #[test]
    fn test_unknown_skill_falls_back_to_search_links() {
        let resources = find_resources("Terraform");
        assert_eq!(resources.len(), 2);
        assert!(resources[0].title.contains("Terraform"));
        assert!(resources[0].url.contains("Terraform"));
    }
}
