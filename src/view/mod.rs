//! View-side data policy: each page fetch ends up `Loaded` (live data, possibly empty)
//! or `Fallback` (the request failed and sample data is shown instead).

pub mod fallback;
pub mod filter;

pub use filter::{CourseFilter, ResearchFilter};

use crate::client::EduLearnClient;
use crate::models::{Course, ResearchCategory, ResearchProject, Stat, TeamMember, Testimonial};
use crate::service::category_summary;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Loaded(T),
    Fallback(T),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

impl<T> Loadable<T> {
    /// A successful fetch is kept as-is even when empty; only a failure substitutes `fallback`.
    pub fn from_result<E: Display>(result: Result<T, E>, fallback: impl FnOnce() -> T) -> Self {
        match result {
            Ok(data) => Loadable::Loaded(data),
            Err(e) => {
                tracing::warn!(error = %e, "fetch failed, showing fallback data");
                Loadable::Fallback(fallback())
            }
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Loadable::Loading => None,
            Loadable::Loaded(d) | Loadable::Fallback(d) => Some(d),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Loadable::Fallback(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Loadable::Loading => Loadable::Loading,
            Loadable::Loaded(d) => Loadable::Loaded(f(d)),
            Loadable::Fallback(d) => Loadable::Fallback(f(d)),
        }
    }
}

impl<T> Loadable<Vec<T>> {
    /// Items to render; empty while loading.
    pub fn items(&self) -> &[T] {
        self.data().map(Vec::as_slice).unwrap_or(&[])
    }
}

pub async fn load_courses(client: &EduLearnClient) -> Loadable<Vec<Course>> {
    Loadable::from_result(client.courses().await, fallback::courses)
}

pub async fn load_testimonials(client: &EduLearnClient) -> Loadable<Vec<Testimonial>> {
    Loadable::from_result(client.testimonials().await, fallback::testimonials)
}

pub async fn load_team(client: &EduLearnClient) -> Loadable<Vec<TeamMember>> {
    Loadable::from_result(client.team().await, fallback::team)
}

pub async fn load_research(client: &EduLearnClient) -> Loadable<Vec<ResearchProject>> {
    Loadable::from_result(client.research().await, fallback::research)
}

pub async fn load_stats(client: &EduLearnClient) -> Loadable<Vec<Stat>> {
    Loadable::from_result(client.stats().await, fallback::stats)
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomePage {
    pub courses: Loadable<Vec<Course>>,
    pub testimonials: Loadable<Vec<Testimonial>>,
    pub stats: Loadable<Vec<Stat>>,
}

/// Home page fetches run concurrently, each falling back on its own.
pub async fn load_home(client: &EduLearnClient) -> HomePage {
    let (courses, testimonials, stats) =
        tokio::join!(load_courses(client), load_testimonials(client), load_stats(client));
    HomePage {
        courses,
        testimonials,
        stats,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutPage {
    pub team: Loadable<Vec<TeamMember>>,
    pub stats: Loadable<Vec<Stat>>,
}

pub async fn load_about(client: &EduLearnClient) -> AboutPage {
    let (team, stats) = tokio::join!(load_team(client), load_stats(client));
    AboutPage { team, stats }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResearchPage {
    pub projects: Loadable<Vec<ResearchProject>>,
    /// Derived from whichever project list is shown.
    pub categories: Vec<ResearchCategory>,
}

impl ResearchPage {
    pub fn visible(&self, filter: &ResearchFilter) -> Vec<&ResearchProject> {
        filter.apply(self.projects.items())
    }
}

pub async fn load_research_page(client: &EduLearnClient) -> ResearchPage {
    let projects = load_research(client).await;
    let categories = category_summary(projects.items());
    ResearchPage { projects, categories }
}
