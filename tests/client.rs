mod common;

use common::{router, MemoryStore};
use edulearn_api::models::{CourseInput, NewContactMessage, ResearchStatus};
use edulearn_api::view::{self, Loadable, ResearchFilter};
use edulearn_api::EduLearnClient;
use tokio::net::TcpListener;

/// Serve the router on an ephemeral port and return a client pointed at it.
async fn serve(store: MemoryStore) -> EduLearnClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = router(store);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });
    EduLearnClient::new(&format!("http://{addr}/api")).expect("client")
}

/// A base address nothing listens on.
async fn unreachable_client() -> EduLearnClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    EduLearnClient::new(&format!("http://{addr}/api")).expect("client")
}

#[tokio::test]
async fn client_covers_course_lifecycle() {
    let client = serve(MemoryStore::seeded()).await;

    assert_eq!(client.health().await.unwrap().message, "EduLearn API is running!");
    assert_eq!(client.courses().await.unwrap().len(), 5);

    let input = CourseInput {
        title: Some("Data Engineering".into()),
        price: Some(420.0),
        features: vec!["Pipelines".into()],
        ..CourseInput::default()
    };
    let created = client.create_course(&input).await.unwrap();
    assert_eq!(created.title, "Data Engineering");
    assert_eq!(client.course(created.id).await.unwrap(), created);

    let replacement = CourseInput {
        title: Some("Data Engineering II".into()),
        ..CourseInput::default()
    };
    let updated = client.update_course(created.id, &replacement).await.unwrap();
    assert_eq!(updated.price, None);
    assert!(updated.features.is_empty());

    let deleted = client.delete_course(created.id).await.unwrap();
    assert_eq!(deleted.message, "Course deleted successfully");

    let err = client.course(created.id).await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn client_reads_research_views_and_contact() {
    let client = serve(MemoryStore::seeded()).await;

    assert_eq!(client.research().await.unwrap().len(), 2);
    assert_eq!(client.research_project(1).await.unwrap().status, ResearchStatus::Ongoing);
    assert_eq!(client.research_categories().await.unwrap()[0].research_count, 2);
    assert_eq!(client.research_by_category("Blockchain & Security").await.unwrap().len(), 1);
    assert_eq!(client.research_by_status(ResearchStatus::Upcoming).await.unwrap().len(), 0);
    assert_eq!(client.testimonials().await.unwrap().len(), 3);
    assert_eq!(client.team().await.unwrap().len(), 3);
    assert_eq!(client.stats().await.unwrap().len(), 4);

    let form = NewContactMessage {
        name: Some("Ana".into()),
        email: Some("a@x.com".into()),
        phone: Some("555".into()),
        subject: Some("Hi".into()),
        message: Some("Test".into()),
    };
    let saved = client.submit_contact(&form).await.unwrap();
    assert_eq!(saved.email, "a@x.com");
    assert_eq!(client.contact_messages().await.unwrap(), vec![saved]);
}

#[tokio::test]
async fn server_errors_propagate_unmodified() {
    let client = serve(MemoryStore::offline()).await;
    let err = client.courses().await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
}

#[tokio::test]
async fn pages_fall_back_only_when_the_fetch_fails() {
    let live = serve(MemoryStore::empty()).await;
    let home = view::load_home(&live).await;
    assert_eq!(home.courses, Loadable::Loaded(Vec::new()));
    assert_eq!(home.stats, Loadable::Loaded(Vec::new()));

    let down = unreachable_client().await;
    let about = view::load_about(&down).await;
    assert!(about.team.is_fallback());
    assert!(about.stats.is_fallback());
    assert_eq!(about.team.items().len(), 3);
}

#[tokio::test]
async fn research_page_filters_live_and_fallback_data_alike() {
    let live = view::load_research_page(&serve(MemoryStore::seeded()).await).await;
    let fallback = view::load_research_page(&unreachable_client().await).await;
    assert!(!live.projects.is_fallback());
    assert!(fallback.projects.is_fallback());

    let filter = ResearchFilter::default().with_search("credential");
    for page in [&live, &fallback] {
        let visible = page.visible(&filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
        assert_eq!(page.categories[0].name, "All");
        assert_eq!(page.categories[0].research_count, 2);
    }
}
