use geosite::domain::model::CompanyProfile;
use geosite::{ContentLoader, HttpGateway, LoadState};
use httpmock::prelude::*;
use serde_json::json;

const READ_PATHS: [&str; 4] = ["/company_details", "/services", "/gallery", "/products"];

fn mock_reads<'a>(server: &'a MockServer, failing: Option<&str>) -> Vec<httpmock::Mock<'a>> {
    READ_PATHS
        .iter()
        .map(|path| {
            let fails = failing == Some(*path);
            server.mock(|when, then| {
                when.method(GET).path(*path);
                if fails {
                    then.status(500).json_body(json!({"error": "db down"}));
                } else {
                    let body = match *path {
                        "/company_details" => json!([{
                            "name": "Gateway Geo",
                            "phone": "+91-9000000000",
                            "email": "hello@gateway.example"
                        }]),
                        "/services" => json!([
                            {"id": 1, "title": "HDPE Pipeline Installation", "features": "[\"Expert welding\",\"Leak-proof joints\"]"},
                            {"id": 2, "title": "Geomembrane Installation", "features": "Leak detection, Quality testing"}
                        ]),
                        "/gallery" => json!([{"id": 1, "image_url": "/g/1.jpg"}]),
                        _ => json!([
                            {"id": 1, "title": "HDPE Pipes", "price": "Contact for pricing", "applications": ["Irrigation", "Mining"]}
                        ]),
                    };
                    then.status(200)
                        .header("Content-Type", "application/json")
                        .json_body(body);
                }
            })
        })
        .collect()
}

#[tokio::test]
async fn test_load_all_aggregates_four_reads() -> anyhow::Result<()> {
    let server = MockServer::start();
    let mocks = mock_reads(&server, None);

    let gateway = HttpGateway::with_client(&server.base_url(), reqwest::Client::new())?;
    let loader = ContentLoader::new(gateway);
    let content = loader.load_all().await?;

    for mock in &mocks {
        mock.assert();
    }
    assert_eq!(content.company.name, "Gateway Geo");
    assert_eq!(content.services.len(), 2);
    assert_eq!(
        content.services[0].features,
        vec!["Expert welding", "Leak-proof joints"]
    );
    assert_eq!(
        content.services[1].features,
        vec!["Leak detection", "Quality testing"]
    );
    assert_eq!(content.gallery.len(), 1);
    assert_eq!(content.products[0].applications, vec!["Irrigation", "Mining"]);
    Ok(())
}

#[tokio::test]
async fn test_any_failing_read_falls_back_to_defaults() -> anyhow::Result<()> {
    for failing in READ_PATHS {
        let server = MockServer::start();
        let _mocks = mock_reads(&server, Some(failing));

        let gateway = HttpGateway::with_client(&server.base_url(), reqwest::Client::new())?;
        let loader = ContentLoader::new(gateway);
        let state = loader.load().await;

        assert!(state.can_retry(), "{} failing should fail the load", failing);
        assert_eq!(state.company(), &CompanyProfile::default_profile());
        assert!(state.content().services.is_empty());
        assert!(state.content().gallery.is_empty());
        assert!(state.content().products.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn test_malformed_read_body_fails_the_load() -> anyhow::Result<()> {
    let server = MockServer::start();
    for path in READ_PATHS {
        server.mock(|when, then| {
            when.method(GET).path(path);
            if path == "/products" {
                then.status(200).body("not json at all");
            } else {
                then.status(200).json_body(json!([]));
            }
        });
    }

    let gateway = HttpGateway::with_client(&server.base_url(), reqwest::Client::new())?;
    let state = ContentLoader::new(gateway).load().await;

    assert!(matches!(state, LoadState::Failed { .. }));
    Ok(())
}

#[tokio::test]
async fn test_retry_after_outage() -> anyhow::Result<()> {
    let server = MockServer::start();
    let mut mocks = mock_reads(&server, Some("/gallery"));

    let gateway = HttpGateway::with_client(&server.base_url(), reqwest::Client::new())?;
    let loader = ContentLoader::new(gateway);
    let mut state = loader.load().await;
    assert!(state.can_retry());

    for mock in mocks.iter_mut() {
        mock.delete();
    }
    let _healthy = mock_reads(&server, None);

    loader.refresh(&mut state).await;
    assert!(matches!(state, LoadState::Ready(_)));
    assert_eq!(state.company().name, "Gateway Geo");
    Ok(())
}
