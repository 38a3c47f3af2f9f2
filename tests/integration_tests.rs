//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: Client → HttpBackend → typed resources

use futures::StreamExt;
use pokesdk::{CancellationToken, Client, Error, PokemonRef, Resource};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POKEMON: &str = include_str!("fixtures/pokemon.json");
const GENERATION: &str = include_str!("fixtures/generation.json");
const POKEMON_PAGE_1: &str = include_str!("fixtures/list_pokemon_page_1.json");
const POKEMON_PAGE_2: &str = include_str!("fixtures/list_pokemon_page_2.json");
const GENERATION_PAGE_1: &str = include_str!("fixtures/list_generation_page_1.json");
const GENERATION_PAGE_2: &str = include_str!("fixtures/list_generation_page_2.json");

/// Fixture body with `{base_url}` pointing at the mock server
fn fixture(body: &str, server: &MockServer) -> String {
    body.replace("{base_url}", &server.uri())
}

fn json_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

fn client_for(server: &MockServer) -> Client {
    let config = Client::builder()
        .base_url(server.uri())
        .http_client(reqwest::Client::new())
        .build()
        .unwrap();
    Client::with_config(config)
}

async fn mount_pokemon_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param_is_missing("offset"))
        .respond_with(json_response(fixture(POKEMON_PAGE_1, server)))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("offset", "2"))
        .and(query_param("limit", "2"))
        .respond_with(json_response(fixture(POKEMON_PAGE_2, server)))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_generation_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/generation"))
        .and(query_param_is_missing("offset"))
        .respond_with(json_response(fixture(GENERATION_PAGE_1, server)))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/generation"))
        .and(query_param("offset", "1"))
        .and(query_param("limit", "1"))
        .respond_with(json_response(fixture(GENERATION_PAGE_2, server)))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Pokemon Tests
// ============================================================================

#[tokio::test]
async fn test_pokemon_get_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/3"))
        .respond_with(json_response(POKEMON.to_string()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let pokemon = client.pokemon.get_by_id(3).await.unwrap();

    assert_eq!(pokemon.id, 3);
    assert_eq!(pokemon.name, "venusaur");
    assert_eq!(pokemon.base_experience, Some(263));
    assert_eq!(pokemon.abilities.len(), 2);
    assert!(pokemon.abilities[1].is_hidden);
    assert_eq!(pokemon.types[1].type_.name, "poison");
    assert_eq!(pokemon.moves[0].move_.name, "swords-dance");
    assert_eq!(pokemon.sprites.front_female, None);
}

#[tokio::test]
async fn test_pokemon_get_by_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/venusaur"))
        .respond_with(json_response(POKEMON.to_string()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let pokemon = client.pokemon.get_by_name("venusaur").await.unwrap();

    assert_eq!(pokemon.id, 3);
    assert_eq!(pokemon.stats[1].stat.name, "special-attack");
}

#[tokio::test]
async fn test_pokemon_get_by_ref() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/3"))
        .respond_with(json_response(POKEMON.to_string()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reference = PokemonRef {
        name: "venusaur".to_string(),
        url: format!("{}/pokemon/3", mock_server.uri()),
    };
    let pokemon = client.pokemon.get_by_ref(&reference).await.unwrap();

    assert_eq!(pokemon.name, "venusaur");
    assert_eq!(pokemon.id, 3);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/pokemon/3");
}

#[tokio::test]
async fn test_pokemon_get_by_ref_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reference = PokemonRef {
        name: "missingno".to_string(),
        url: format!("{}/pokemon/99", mock_server.uri()),
    };
    let err = client.pokemon.get_by_ref(&reference).await.unwrap_err();

    assert!(matches!(err, Error::NotFound(Resource::Pokemon)));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_pokemon_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.pokemon.get_by_id(1).await.unwrap_err();

    assert!(!err.is_not_found());
    assert_eq!(err.backend_status(), Some(500));
    assert!(err.to_string().contains("error getting pokemon"));
}

#[tokio::test]
async fn test_pokemon_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/1"))
        .respond_with(json_response(r#"{"id": 1, "name": "#.to_string()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.pokemon.get_by_id(1).await.unwrap_err();

    assert!(err.to_string().contains("failed to decode"));
    assert_eq!(err.backend_status(), None);
}

#[tokio::test]
async fn test_pokemon_list_then_get_by_ref() {
    let mock_server = MockServer::start().await;
    mount_pokemon_pages(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/pokemon/3/"))
        .respond_with(json_response(POKEMON.to_string()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let pages = client.pokemon.list();

    let first = pages.next().await.unwrap().unwrap();
    assert_eq!(first.count, 3);
    assert_eq!(first.results.len(), 2);

    let second = pages.next().await.unwrap().unwrap();
    assert_eq!(second.results[0].name, "venusaur");
    assert!(pages.next().await.is_none());
    assert!(pages.is_exhausted().await);

    let pokemon = client.pokemon.get_by_ref(&second.results[0]).await.unwrap();
    assert_eq!(pokemon.name, "venusaur");
}

// ============================================================================
// Generation Tests
// ============================================================================

#[tokio::test]
async fn test_generation_get_by_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/generation/generation-i"))
        .respond_with(json_response(GENERATION.to_string()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let generation = client.generation.get_by_name("generation-i").await.unwrap();

    assert_eq!(generation.id, 1);
    assert_eq!(generation.main_region.name, "kanto");
    assert_eq!(generation.version_groups.len(), 2);
    assert_eq!(generation.names[1].name, "Generation I");
}

#[tokio::test]
async fn test_generation_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/generation/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.generation.get_by_id(42).await.unwrap_err();

    assert_eq!(err.not_found_kind(), Some(Resource::Generation));
    assert_eq!(err.to_string(), "generation: not found");
}

#[tokio::test]
async fn test_generation_list_next() {
    let mock_server = MockServer::start().await;
    mount_generation_pages(&mock_server).await;

    let client = client_for(&mock_server);
    let pages = client.generation.list();

    let first = pages.next().await.unwrap().unwrap();
    assert_eq!(first.results[0].name, "generation-i");
    assert!(first.previous.is_none());

    let second = pages.next().await.unwrap().unwrap();
    assert_eq!(second.results[0].name, "generation-ii");
    assert!(second.next.is_none());

    assert!(pages.next().await.is_none());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(requests[1].url.query(), Some("offset=1&limit=1"));
}

#[tokio::test]
async fn test_generation_list_all() {
    let mock_server = MockServer::start().await;
    mount_generation_pages(&mock_server).await;

    let client = client_for(&mock_server);
    let names: Vec<String> = client
        .generation
        .list()
        .all(CancellationToken::new())
        .map(|page| page.unwrap().results[0].name.clone())
        .collect()
        .await;

    assert_eq!(names, vec!["generation-i", "generation-ii"]);
}

#[tokio::test]
async fn test_generation_list_error_keeps_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/generation"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let pages = client.generation.list();

    let err = pages.next().await.unwrap().unwrap_err();
    assert!(err
        .to_string()
        .starts_with("pokesdk: error listing generations"));
    assert_eq!(err.backend_status(), Some(503));

    // the cursor stays put, so the same URL is retried
    assert!(!pages.is_exhausted().await);
    assert!(pages.next().await.unwrap().is_err());
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}
