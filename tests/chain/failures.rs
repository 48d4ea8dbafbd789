use scriptsmith::chain::{ReviewChain, ReviewRequest};
use scriptsmith::corpus::ReferenceCorpus;
use wiremock::ResponseTemplate;

use crate::mock_services::{MockStages, anthropic_reply, openai_reply};

fn corpus() -> ReferenceCorpus {
    ReferenceCorpus::from_pairs([("Luigi's", "Great pasta, loved it!")])
}

#[tokio::test]
async fn style_stage_error_never_reaches_review_stage() {
    let stages = MockStages::start().await;
    stages
        .mount_style(
            ResponseTemplate::new(500).set_body_string(r#"{"error":"upstream exploded"}"#),
            1,
        )
        .await;
    stages.mount_review(anthropic_reply("unused"), 0).await;

    let chain = ReviewChain::from_config(&stages.config()).unwrap();
    let err = chain
        .run(&corpus(), &ReviewRequest::default())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("500"), "unexpected error: {message}");
    assert!(message.contains("upstream exploded"));
    assert!(
        stages
            .review
            .received_requests()
            .await
            .unwrap_or_default()
            .is_empty()
    );
}

#[tokio::test]
async fn review_stage_error_is_returned_as_is() {
    let stages = MockStages::start().await;
    stages.mount_style(openai_reply("profile"), 1).await;
    stages
        .mount_review(
            ResponseTemplate::new(529).set_body_string(r#"{"type":"overloaded_error"}"#),
            1,
        )
        .await;

    let chain = ReviewChain::from_config(&stages.config()).unwrap();
    let err = chain
        .run(&corpus(), &ReviewRequest::default())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("529"));
}

#[tokio::test]
async fn error_bodies_are_scrubbed_of_credentials() {
    let stages = MockStages::start().await;
    stages
        .mount_style(
            ResponseTemplate::new(401)
                .set_body_string("invalid key sk-live-0123456789abcdef for this project"),
            1,
        )
        .await;

    let chain = ReviewChain::from_config(&stages.config()).unwrap();
    let err = chain.extract_style(&corpus()).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("401"));
    assert!(!message.contains("sk-live-0123456789abcdef"));
}

#[tokio::test]
async fn missing_key_fails_on_first_call_not_at_construction() {
    let stages = MockStages::start().await;

    let mut config = stages.config();
    config.style.api_key = None;
    config.style.provider = Some(format!("custom:{}", stages.style.uri()));

    let Ok(chain) = ReviewChain::from_config(&config) else {
        panic!("construction must not check credentials");
    };

    // Custom endpoints only fall back to SCRIPTSMITH_API_KEY / API_KEY.
    if std::env::var("SCRIPTSMITH_API_KEY").is_err() && std::env::var("API_KEY").is_err() {
        let err = chain.extract_style(&corpus()).await.unwrap_err();
        assert!(err.to_string().contains("API key not set"));
        assert!(
            stages
                .style
                .received_requests()
                .await
                .unwrap_or_default()
                .is_empty()
        );
    }
}
