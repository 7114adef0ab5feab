//! The production agent runner against a local stand-in for the OpenAI API.

use std::sync::Arc;
use std::time::Duration;

use outreach_core::common::OutreachError;
use outreach_core::config::Config;
use outreach_core::domains::agents::AgentSpec;
use outreach_core::domains::cold_email::{run_cold_email, ColdEmailRequest};
use outreach_core::kernel::{BaseAgentRunner, OpenAIAgentRunner, OutreachDeps};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 40, "completion_tokens": 20, "total_tokens": 60}
    }))
}

fn config_for(server: &MockServer) -> Config {
    Config {
        openai_api_key: "sk-mock-key".into(),
        openai_base_url: server.uri(),
        agent_model: "gpt-4o-mini".into(),
        agent_timeout: Duration::from_secs(5),
        notify_recipient: None,
    }
}

#[tokio::test]
async fn test_run_sends_instructions_as_system_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-mock-key"))
        .and(body_string_contains(r#""role":"system","content":"You are a great philosopher""#))
        .and(body_string_contains(r#""role":"user","content":"Tell me a quote""#))
        .respond_with(completion("Carpe diem."))
        .expect(1)
        .mount(&server)
        .await;

    let runner = OpenAIAgentRunner::from_config(&config_for(&server)).unwrap();
    let agent = AgentSpec::new("Motivator", "You are a great philosopher", "gpt-4o-mini");

    let output = runner.run(&agent, "Tell me a quote").await.unwrap();

    assert_eq!(output.agent_name, "Motivator");
    assert_eq!(output.final_output, "Carpe diem.");
    assert_eq!(output.usage.map(|u| u.total_tokens), Some(60));
}

#[tokio::test]
async fn test_cold_email_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("professional sales representative"))
        .respond_with(completion("Formal draft"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("witty and charismatic"))
        .respond_with(completion("Funny draft"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("time-conscious"))
        .respond_with(completion("Short draft"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("sales force manager"))
        .and(body_string_contains(r"Cold emails:\nFormal draft\n\nFunny draft\n\nShort draft\n"))
        .respond_with(completion("Short draft"))
        .expect(1)
        .mount(&server)
        .await;

    let deps = OutreachDeps::from_config(&config_for(&server)).unwrap();

    let outcome = run_cold_email(&deps, &ColdEmailRequest::default())
        .await
        .unwrap();

    let texts: Vec<&str> = outcome.emails.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Formal draft", "Funny draft", "Short draft"]);
    assert_eq!(outcome.selection.text, "Short draft");
    assert_eq!(outcome.selection.matching_candidate(&outcome.emails), Some(2));
}

#[tokio::test]
async fn test_api_error_fails_the_batch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("witty and charismatic"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion("Some draft"))
        .mount(&server)
        .await;

    let deps = OutreachDeps::new(
        Arc::new(OpenAIAgentRunner::from_config(&config_for(&server)).unwrap()),
        "gpt-4o-mini",
    );

    let err = run_cold_email(&deps, &ColdEmailRequest::default())
        .await
        .unwrap_err();

    match err {
        OutreachError::Batch { failures, total } => {
            assert_eq!(total, 3);
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].agent, "Agent2");
            assert!(failures[0].message.contains("upstream exploded"));
        }
        other => panic!("expected Batch error, got {other:?}"),
    }
}
