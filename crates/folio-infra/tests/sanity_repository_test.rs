use folio_core::config::ContentConfig;
use folio_core::ports::{ContentError, ContentRepositoryPort};
use folio_core::{ImageRef, LocaleCode};
use folio_infra::SanityContentRepository;
use mockito::{Matcher, Server};
use serde_json::json;

const QUERY_PATH: &str = "/v2024-01-01/data/query/production";

fn repository(server: &Server) -> SanityContentRepository {
    let config = ContentConfig {
        api_base_url: Some(server.url()),
        timeout_ms: 2_000,
        ..ContentConfig::default()
    };
    SanityContentRepository::new(&config).unwrap()
}

#[tokio::test]
async fn all_projects_sends_locale_parameter_and_maps_documents() {
    let mut server = Server::new_async().await;
    let body = json!({
        "ms": 4,
        "query": "...",
        "result": [
            {
                "_id": "p1",
                "title": "Olav Solberg AS",
                "category": "Web Design",
                "description": "Company site",
                "technologies": ["Next.js", "Tailwind"],
                "website": "https://olavsolberg.no",
                "image": null,
                "featured": true,
                "nordcode": true,
                "order": 1
            },
            {
                "_id": "p2",
                "title": "Butikk",
                "category": "E-commerce",
                "description": "Shop",
                "technologies": ["Shopify"],
                "website": "https://butikk.no",
                "image": {"asset": {"_id": "image-1", "url": "https://cdn.sanity.io/1.png"}, "alt": "Shop"},
                "featured": false,
                "nordcode": false,
                "order": null
            }
        ]
    });
    let mock = server
        .mock("GET", QUERY_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("$lang".into(), "\"no\"".into()),
            Matcher::Regex("query=".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let projects = repository(&server)
        .all_projects(&LocaleCode::from_str("no"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].technologies, vec!["Next.js", "Tailwind"]);
    assert_eq!(projects[0].image, ImageRef::Absent);
    assert_eq!(
        projects[1].image,
        ImageRef::Resolved {
            url: "https://cdn.sanity.io/1.png".into(),
            alt: Some("Shop".into()),
        }
    );
}

#[tokio::test]
async fn error_status_is_reported_with_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", QUERY_PATH)
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;

    let err = repository(&server)
        .featured_projects(&LocaleCode::from_str("en"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ContentError::Status {
            status: 403,
            message: "forbidden".into(),
        }
    );
}

#[tokio::test]
async fn body_without_envelope_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", QUERY_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let err = repository(&server).technical_expertise().await.unwrap_err();

    assert!(matches!(err, ContentError::Decode(_)));
}

#[tokio::test]
async fn missing_about_document_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", QUERY_PATH)
        .match_query(Matcher::UrlEncoded("$lang".into(), "\"en\"".into()))
        .with_status(200)
        .with_body(r#"{"result": null}"#)
        .create_async()
        .await;

    let about = repository(&server)
        .about(&LocaleCode::from_str("en"))
        .await
        .unwrap();

    assert!(about.is_none());
}

#[tokio::test]
async fn unreachable_store_is_a_transport_error() {
    let config = ContentConfig {
        api_base_url: Some("http://127.0.0.1:9".into()),
        timeout_ms: 500,
        ..ContentConfig::default()
    };
    let repo = SanityContentRepository::new(&config).unwrap();

    let err = repo.all_projects(&LocaleCode::from_str("en")).await.unwrap_err();

    assert!(matches!(err, ContentError::Transport(_)));
}
