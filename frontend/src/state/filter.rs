use log::{debug, warn};

use crate::content::Project;

/// Sentinel label that shows every project.
pub const CATEGORY_ALL: &str = "All";

pub const CATEGORIES: &[&str] = &[
    CATEGORY_ALL,
    "Web Development",
    "Data Analytics",
    "Machine Learning",
    "Research",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFilter {
    selected: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self { selected: CATEGORY_ALL.to_string() }
    }
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_active(&self, label: &str) -> bool {
        self.selected == label
    }

    /// Stores `label` as-is. Labels outside [`CATEGORIES`] match no project.
    pub fn select_category(&mut self, label: &str) {
        if !CATEGORIES.contains(&label) {
            warn!("unknown project category {:?}; nothing will match", label);
        }
        debug!("project filter {:?} -> {:?}", self.selected, label);
        self.selected = label.to_string();
    }

    /// Projects to show, in source order.
    pub fn visible_projects<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        if self.selected == CATEGORY_ALL {
            return projects.iter().collect();
        }
        projects
            .iter()
            .filter(|project| project.category == self.selected)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use pretty_assertions::assert_eq;

    fn titles(projects: &[&Project]) -> Vec<&'static str> {
        projects.iter().map(|p| p.title).collect()
    }

    #[test]
    fn starts_on_the_sentinel_and_shows_everything_in_order() {
        let filter = ProjectFilter::new();
        assert_eq!(filter.selected(), CATEGORY_ALL);
        let all: Vec<&Project> = PROJECTS.iter().collect();
        assert_eq!(filter.visible_projects(PROJECTS), all);
    }

    #[test]
    fn machine_learning_yields_two_projects_in_source_order() {
        let mut filter = ProjectFilter::new();
        filter.select_category("Machine Learning");
        assert_eq!(
            titles(&filter.visible_projects(PROJECTS)),
            vec!["Customer Churn Prediction Model", "Air Canvas Application"]
        );
    }

    #[test]
    fn each_concrete_category_is_an_exact_match() {
        let mut filter = ProjectFilter::new();
        for &category in &CATEGORIES[1..] {
            filter.select_category(category);
            let visible = filter.visible_projects(PROJECTS);
            assert!(!visible.is_empty(), "{category} has no projects");
            assert!(visible.iter().all(|p| p.category == category));
            let expected = PROJECTS.iter().filter(|p| p.category == category).count();
            assert_eq!(visible.len(), expected);
        }
    }

    #[test]
    fn selecting_the_same_category_twice_is_idempotent() {
        let mut filter = ProjectFilter::new();
        filter.select_category("Research");
        let first = filter.visible_projects(PROJECTS);
        filter.select_category("Research");
        assert_eq!(filter.visible_projects(PROJECTS), first);
    }

    #[test]
    fn unknown_category_shows_nothing() {
        let mut filter = ProjectFilter::new();
        filter.select_category("Blockchain");
        assert!(filter.visible_projects(PROJECTS).is_empty());
        assert!(filter.is_active("Blockchain"));
    }

    #[test]
    fn back_to_all_restores_the_full_list() {
        let mut filter = ProjectFilter::new();
        filter.select_category("Data Analytics");
        filter.select_category(CATEGORY_ALL);
        assert_eq!(filter.visible_projects(PROJECTS).len(), PROJECTS.len());
    }
}
