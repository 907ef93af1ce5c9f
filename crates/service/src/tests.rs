use super::*;

use sqlscout_core::{Conversation, QueryOutcome, NO_HISTORY_MARKER};
use sqlscout_db::Database;
use sqlscout_embeddings::{EmbeddingError, EmbeddingProvider};
use sqlscout_retrieval::{build_schema_documents, SchemaIndex};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KNOWN_TABLES: [&str; 4] = ["customers", "order_items", "orders", "products"];

/// Deterministic bag-of-words provider for tests; shared vocabulary between
/// query and document drives the ranking.
struct WordHashProvider;

impl EmbeddingProvider for WordHashProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vector = vec![0.0f32; 128];
        for word in
            text.to_lowercase().split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty())
        {
            let mut h: usize = 0;
            for byte in word.bytes() {
                h = h.wrapping_mul(31).wrapping_add(byte as usize);
            }
            vector[h % 128] += 1.0;
        }
        Ok(vector)
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{
            "message": {
                "content": content,
                "role": "assistant"
            }
        }]
    })
}

async fn service_against(server: &MockServer, top_k: usize) -> QueryService {
    let db = Database::open_in_memory().unwrap();
    db.seed_demo_data().unwrap();
    let documents = build_schema_documents(&db).unwrap();
    let index = SchemaIndex::build(std::sync::Arc::new(WordHashProvider), documents).unwrap();
    let llm = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();
    QueryService::new(db, Arc::new(index), Arc::new(llm), top_k)
}

/// Mount the two per-request completions: SQL synthesis (matched on the
/// schemas section) and insight (matched on the summarization instruction).
async fn mount_completions(server: &MockServer, sql: &str, insight: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("Relevant table schemas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(sql)))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("key takeaway"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(insight)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn successful_request_fills_all_fields_and_appends_two_turns() {
    let server = MockServer::start().await;
    mount_completions(
        &server,
        "```sql\nSELECT customer_id, name FROM customers WHERE region = 'California';\n```",
        "Alice Chen is the only customer from California.",
    )
    .await;

    let service = service_against(&server, 2).await;
    let mut conversation = Conversation::new();

    let outcome =
        service.ask("Show me all customers from California", &mut conversation).await.unwrap();

    let QueryOutcome::Success(success) = outcome else {
        panic!("expected success, got {outcome:?}");
    };
    assert_eq!(
        success.sql_query,
        "SELECT customer_id, name FROM customers WHERE region = 'California';"
    );
    assert!(success.results.contains("Alice Chen"));
    assert!(success.results.contains("(1 rows)"));
    assert_eq!(success.insight, "Alice Chen is the only customer from California.");
    assert!(success.tables_used.contains(&"customers".to_owned()));
    assert!(success.tables_used.len() <= 2);
    for table in &success.tables_used {
        assert!(KNOWN_TABLES.contains(&table.as_str()));
    }

    assert_eq!(conversation.len(), 2);
    let turns = conversation.turns();
    assert_eq!(turns[0].content, "Show me all customers from California");
    assert!(turns[1].content.starts_with("SQL: SELECT customer_id"));
    assert!(turns[1].content.contains("Results:"));
}

#[tokio::test]
async fn failed_execution_returns_error_and_preserves_history() {
    let server = MockServer::start().await;
    mount_completions(&server, "SELECT * FROM quarterly_forecasts;", "unused").await;

    let service = service_against(&server, 2).await;
    let mut conversation = Conversation::new();

    let outcome = service.ask("Show me the forecasts", &mut conversation).await.unwrap();

    let QueryOutcome::Failure(failure) = outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert!(failure.error.contains("quarterly_forecasts"));
    assert!(conversation.is_empty());
}

#[tokio::test]
async fn follow_up_question_sees_prior_turns_in_the_prompt() {
    let server = MockServer::start().await;
    mount_completions(
        &server,
        "SELECT name FROM customers WHERE region = 'Texas';",
        "Maria Lopez is the Texan customer.",
    )
    .await;

    let service = service_against(&server, 2).await;
    let mut conversation = Conversation::new();

    service.ask("Which customers are in Texas?", &mut conversation).await.unwrap();
    service.ask("And what did they order?", &mut conversation).await.unwrap();
    assert_eq!(conversation.len(), 4);

    let requests = server.received_requests().await.unwrap();
    let bodies: Vec<String> =
        requests.iter().map(|r| String::from_utf8_lossy(&r.body).into_owned()).collect();
    let synthesis_bodies: Vec<&String> =
        bodies.iter().filter(|b| b.contains("Relevant table schemas")).collect();
    assert_eq!(synthesis_bodies.len(), 2);
    assert!(synthesis_bodies[0].contains(NO_HISTORY_MARKER));
    assert!(synthesis_bodies[1].contains("User: Which customers are in Texas?"));
    assert!(!synthesis_bodies[1].contains(NO_HISTORY_MARKER));
}

#[tokio::test]
async fn top_k_clamps_to_the_number_of_indexed_tables() {
    let server = MockServer::start().await;
    mount_completions(&server, "SELECT COUNT(*) FROM orders;", "There are six orders.").await;

    let service = service_against(&server, 10).await;
    let mut conversation = Conversation::new();

    let outcome = service.ask("How many orders are there?", &mut conversation).await.unwrap();
    let QueryOutcome::Success(success) = outcome else {
        panic!("expected success, got {outcome:?}");
    };
    assert_eq!(success.tables_used.len(), 4);
}

#[tokio::test]
async fn provider_failure_propagates_as_error_without_history_append() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let service = service_against(&server, 2).await;
    let mut conversation = Conversation::new();

    let err = service.ask("Show me all customers", &mut conversation).await.unwrap_err();
    assert!(matches!(err, ServiceError::Llm(_)));
    assert!(conversation.is_empty());
}
