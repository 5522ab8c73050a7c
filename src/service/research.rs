//! Derived research views computed in application code.

use crate::models::{ResearchCategory, ResearchProject};
use std::collections::HashMap;

pub const ALL_CATEGORY: &str = "All";

/// Group projects by category and count them. Categories are ordered by count descending,
/// then by name; the synthetic "All" entry (id 0) is always first and counts every project.
pub fn category_summary(projects: &[ResearchProject]) -> Vec<ResearchCategory> {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for p in projects {
        *counts.entry(p.category.as_str()).or_default() += 1;
    }
    let mut grouped: Vec<(&str, i64)> = counts.into_iter().collect();
    grouped.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let total = grouped.iter().map(|(_, n)| n).sum();
    let mut out = Vec::with_capacity(grouped.len() + 1);
    out.push(ResearchCategory {
        id: 0,
        name: ALL_CATEGORY.to_string(),
        description: "All research projects".to_string(),
        research_count: total,
    });
    out.extend(grouped.into_iter().zip(1..).map(|((name, count), id)| ResearchCategory {
        id,
        name: name.to_string(),
        description: format!("{name} research projects"),
        research_count: count,
    }));
    out
}
