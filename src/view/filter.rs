//! Client-side filters. They apply the same way to live and fallback data.

use crate::models::{Course, ResearchProject, ResearchStatus};
use crate::service::research::ALL_CATEGORY;

/// Map a UI selection to a filter value; "All" means no restriction.
fn selection(name: &str) -> Option<String> {
    if name.is_empty() || name == ALL_CATEGORY {
        None
    } else {
        Some(name.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub category: Option<String>,
}

impl CourseFilter {
    pub fn category(name: &str) -> Self {
        Self { category: selection(name) }
    }

    pub fn matches(&self, course: &Course) -> bool {
        match &self.category {
            None => true,
            Some(c) => course.category.as_deref() == Some(c.as_str()),
        }
    }

    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResearchFilter {
    pub category: Option<String>,
    pub status: Option<ResearchStatus>,
    /// Case-insensitive substring matched against title, summary and tags.
    pub search: String,
}

impl ResearchFilter {
    pub fn with_category(mut self, name: &str) -> Self {
        self.category = selection(name);
        self
    }

    pub fn with_status(mut self, status: Option<ResearchStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.search = term.to_string();
        self
    }

    pub fn matches(&self, project: &ResearchProject) -> bool {
        let category_ok = self.category.as_deref().map_or(true, |c| project.category == c);
        let status_ok = self.status.map_or(true, |s| project.status == s);
        category_ok && status_ok && self.matches_search(project)
    }

    fn matches_search(&self, project: &ResearchProject) -> bool {
        let term = self.search.to_lowercase();
        if term.is_empty() {
            return true;
        }
        project.title.to_lowercase().contains(&term)
            || project.summary.to_lowercase().contains(&term)
            || project.tags.iter().any(|t| t.to_lowercase().contains(&term))
    }

    pub fn apply<'a>(&self, projects: &'a [ResearchProject]) -> Vec<&'a ResearchProject> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}
