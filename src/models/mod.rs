//! Row types for the six tables plus the write inputs the API accepts.
//! Field names are snake_case and serialize verbatim.

pub mod contact;
pub mod course;
pub mod research;
pub mod stat;
pub mod team;
pub mod testimonial;

pub use contact::{ContactMessage, NewContactMessage};
pub use course::{Course, CourseInput};
pub use research::{ResearchCategory, ResearchProject, ResearchStatus, UnknownStatus};
pub use stat::Stat;
pub use team::{SocialLinks, TeamMember};
pub use testimonial::Testimonial;
