//! Client Data Layer: one method per API operation, each exactly one HTTP request.
//! No retries, no timeout overrides, no error translation.

mod error;

pub use error::ClientError;

use crate::models::{
    ContactMessage, Course, CourseInput, NewContactMessage, ResearchCategory, ResearchProject, ResearchStatus, Stat,
    TeamMember, Testimonial,
};
use crate::response::MessageBody;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Clone, Debug)]
pub struct EduLearnClient {
    http: reqwest::Client,
    base_url: Url,
}

impl EduLearnClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::NotABase(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base address.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::NotABase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        self.send::<(), T>(Method::GET, segments, None).await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, ClientError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, %url, "api request");
        let mut req = self.http.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req.send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }

    pub async fn health(&self) -> Result<MessageBody, ClientError> {
        self.get(&["health"]).await
    }

    pub async fn courses(&self) -> Result<Vec<Course>, ClientError> {
        self.get(&["courses"]).await
    }

    pub async fn course(&self, id: i32) -> Result<Course, ClientError> {
        self.get(&["courses", &id.to_string()]).await
    }

    pub async fn create_course(&self, input: &CourseInput) -> Result<Course, ClientError> {
        self.send(Method::POST, &["courses"], Some(input)).await
    }

    pub async fn update_course(&self, id: i32, input: &CourseInput) -> Result<Course, ClientError> {
        self.send(Method::PUT, &["courses", &id.to_string()], Some(input)).await
    }

    pub async fn delete_course(&self, id: i32) -> Result<MessageBody, ClientError> {
        self.send::<(), _>(Method::DELETE, &["courses", &id.to_string()], None).await
    }

    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, ClientError> {
        self.get(&["testimonials"]).await
    }

    pub async fn team(&self) -> Result<Vec<TeamMember>, ClientError> {
        self.get(&["team"]).await
    }

    pub async fn research(&self) -> Result<Vec<ResearchProject>, ClientError> {
        self.get(&["research"]).await
    }

    pub async fn research_project(&self, id: i32) -> Result<ResearchProject, ClientError> {
        self.get(&["research", &id.to_string()]).await
    }

    pub async fn research_categories(&self) -> Result<Vec<ResearchCategory>, ClientError> {
        self.get(&["research", "categories"]).await
    }

    pub async fn research_by_category(&self, category: &str) -> Result<Vec<ResearchProject>, ClientError> {
        self.get(&["research", "category", category]).await
    }

    pub async fn research_by_status(&self, status: ResearchStatus) -> Result<Vec<ResearchProject>, ClientError> {
        self.get(&["research", "status", status.as_str()]).await
    }

    pub async fn stats(&self) -> Result<Vec<Stat>, ClientError> {
        self.get(&["stats"]).await
    }

    pub async fn submit_contact(&self, form: &NewContactMessage) -> Result<ContactMessage, ClientError> {
        self.send(Method::POST, &["contact"], Some(form)).await
    }

    pub async fn contact_messages(&self) -> Result<Vec<ContactMessage>, ClientError> {
        self.get(&["contact"]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_extend_the_base_path() {
        let client = EduLearnClient::new("http://localhost:5000/api").unwrap();
        assert_eq!(client.endpoint(&["courses", "7"]).unwrap().as_str(), "http://localhost:5000/api/courses/7");

        let default = EduLearnClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(default.endpoint(&["health"]).unwrap().as_str(), "http://localhost:5000/api/health");

        let trailing = EduLearnClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(trailing.endpoint(&["stats"]).unwrap().as_str(), "http://localhost:5000/api/stats");
    }

    #[test]
    fn category_segments_are_percent_encoded() {
        let client = EduLearnClient::new(DEFAULT_BASE_URL).unwrap();
        let url = client.endpoint(&["research", "category", "Blockchain & Security"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/research/category/Blockchain%20&%20Security");
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(matches!(EduLearnClient::new("mailto:team@edulearn.test"), Err(ClientError::NotABase(_))));
        assert!(matches!(EduLearnClient::new("not a url"), Err(ClientError::InvalidUrl(_))));
    }
}
