//! Category derivation and filtering over a project collection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::model::Project;

/// Label of the pseudo-category that disables filtering.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }
}

/// `"All"` followed by each distinct category in order of first appearance.
pub fn derive_categories(projects: &[Project]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::from([ALL_CATEGORIES]);
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for project in projects {
        if seen.insert(project.category.as_str()) {
            categories.push(project.category.clone());
        }
    }
    categories
}

/// Projects whose category equals `selected`, in their original order.
///
/// `"All"` returns the input unchanged; an unmatched category yields an empty list.
pub fn apply_filter(projects: &[Project], selected: &str) -> Vec<Project> {
    let filter = CategoryFilter::from_label(selected);
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProjectId;
    use crate::project::ImageRef;

    fn project(id: &str, category: &str) -> Project {
        Project {
            id: ProjectId::from_str(id),
            title: format!("Project {id}"),
            category: category.to_string(),
            description: String::new(),
            technologies: vec!["Rust".to_string()],
            website: format!("https://{id}.example"),
            github: None,
            image: ImageRef::Absent,
            featured: false,
            nordcode: false,
            order: None,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("a", "Web Development"),
            project("b", "Mobile App"),
            project("c", "Web Development"),
            project("d", "Robotics"),
            project("e", "Mobile App"),
        ]
    }

    #[test]
    fn test_derive_categories_keeps_first_appearance_order() {
        assert_eq!(
            derive_categories(&sample()),
            vec!["All", "Web Development", "Mobile App", "Robotics"]
        );
    }

    #[test]
    fn test_derive_categories_is_idempotent() {
        let projects = sample();
        assert_eq!(derive_categories(&projects), derive_categories(&projects));
    }

    #[test]
    fn test_derive_categories_of_empty_collection_is_all_only() {
        assert_eq!(derive_categories(&[]), vec![ALL_CATEGORIES]);
    }

    #[test]
    fn test_derive_categories_never_duplicates_all() {
        let projects = vec![project("a", "All"), project("b", "Other")];
        assert_eq!(derive_categories(&projects), vec!["All", "Other"]);
    }

    #[test]
    fn test_apply_filter_all_is_identity() {
        let projects = sample();
        assert_eq!(apply_filter(&projects, ALL_CATEGORIES), projects);
        assert!(apply_filter(&[], ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn test_apply_filter_preserves_relative_order() {
        let filtered = apply_filter(&sample(), "Mobile App");
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "e"]);
        assert!(filtered.iter().all(|p| p.category == "Mobile App"));
    }

    #[test]
    fn test_apply_filter_unknown_category_is_empty() {
        assert!(apply_filter(&sample(), "E-commerce").is_empty());
        assert!(apply_filter(&[], "Mobile App").is_empty());
    }

    #[test]
    fn test_unknown_categories_pass_through() {
        let projects = sample();
        assert!(!projects[3].has_known_category());
        assert_eq!(apply_filter(&projects, "Robotics").len(), 1);
    }
}
