use std::io::Write;

use serde_json::json;
use wiremock::ResponseTemplate;

use scriptsmith::chain::{ReviewChain, ReviewRequest};
use scriptsmith::corpus::{CorpusColumns, ReferenceCorpus};

use crate::mock_services::{MockStages, anthropic_reply, openai_reply, request_bodies};

fn luigis_request() -> ReviewRequest {
    ReviewRequest {
        restaurant_name: "Luigi's".into(),
        cuisine_type: "Italian".into(),
        location: "Rome".into(),
        special_feature: "rooftop seating".into(),
        dishes: "carbonara".into(),
        notes: "upbeat tone".into(),
    }
}

#[tokio::test]
async fn two_calls_thread_profile_into_review_prompt() {
    let stages = MockStages::start().await;
    stages
        .mount_style(openai_reply("1. Tone: very upbeat\n2. Pacing: fast"), 1)
        .await;
    stages
        .mount_review(anthropic_reply("Luigi's rooftop? A MUST!"), 1)
        .await;

    let chain = ReviewChain::from_config(&stages.config()).unwrap();
    let corpus = ReferenceCorpus::from_pairs([("Luigi's", "Great pasta, loved it!")]);

    let output = chain.run(&corpus, &luigis_request()).await.unwrap();

    assert_eq!(
        output.style_profile.as_str(),
        "1. Tone: very upbeat\n2. Pacing: fast"
    );
    assert_eq!(output.review.as_str(), "Luigi's rooftop? A MUST!");

    let style_bodies = request_bodies(&stages.style).await;
    assert_eq!(style_bodies.len(), 1);
    let style = &style_bodies[0];
    assert_eq!(style["model"], "gpt-4o");
    assert_eq!(style["temperature"], 0.8);
    assert_eq!(style["max_tokens"], 3000);
    assert_eq!(style["top_p"], 1.0);
    let style_prompt = style["messages"][0]["content"].as_str().unwrap();
    assert!(style_prompt.contains("Restaurant name Luigi's: Script Great pasta, loved it!"));

    let review_bodies = request_bodies(&stages.review).await;
    assert_eq!(review_bodies.len(), 1);
    let review = &review_bodies[0];
    assert_eq!(review["model"], "claude-3-5-sonnet-20240620");
    assert!(review.get("top_p").is_none());
    let review_prompt = review["messages"][0]["content"].as_str().unwrap();
    for needle in [
        "Luigi's",
        "Italian",
        "Rome",
        "rooftop seating",
        "carbonara",
        "upbeat tone",
        "1. Tone: very upbeat\n2. Pacing: fast",
    ] {
        assert!(
            review_prompt.contains(needle),
            "review prompt missing {needle:?}"
        );
    }
}

#[tokio::test]
async fn csv_corpus_reaches_the_extraction_prompt_in_file_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "Restaurant,Script\n\
         Alpha,\"Crispy, golden, perfect\"\n\
         Beta,\"Line one\nline two\"\n\
         Gamma,Simple\n"
    )
    .unwrap();
    let corpus = ReferenceCorpus::load(file.path(), &CorpusColumns::default()).unwrap();
    assert_eq!(corpus.len(), 3);

    let stages = MockStages::start().await;
    stages.mount_style(openai_reply("profile"), 1).await;
    stages.mount_review(anthropic_reply("review"), 0).await;

    let chain = ReviewChain::from_config(&stages.config()).unwrap();
    let profile = chain.extract_style(&corpus).await.unwrap();
    assert_eq!(profile.as_str(), "profile");

    let bodies = request_bodies(&stages.style).await;
    let prompt = bodies[0]["messages"][0]["content"].as_str().unwrap();
    let alpha = prompt
        .find("Restaurant name Alpha: Script Crispy, golden, perfect")
        .unwrap();
    let beta = prompt
        .find("Restaurant name Beta: Script Line one\nline two")
        .unwrap();
    let gamma = prompt.find("Restaurant name Gamma: Script Simple").unwrap();
    assert!(alpha < beta && beta < gamma);
}

#[tokio::test]
async fn each_run_is_independent() {
    let stages = MockStages::start().await;
    stages.mount_style(openai_reply("profile"), 2).await;
    stages.mount_review(anthropic_reply("review"), 2).await;

    let chain = ReviewChain::from_config(&stages.config()).unwrap();
    let corpus = ReferenceCorpus::from_pairs([("Luigi's", "Great pasta")]);

    let first = chain.run(&corpus, &luigis_request()).await.unwrap();
    let second = chain.run(&corpus, &ReviewRequest::default()).await.unwrap();
    assert_eq!(first, second);

    let reviews = request_bodies(&stages.review).await;
    let second_prompt = reviews[1]["messages"][0]["content"].as_str().unwrap();
    assert!(!second_prompt.contains("carbonara"));
}

#[tokio::test]
async fn empty_replies_pass_through_both_stages() {
    let stages = MockStages::start().await;
    stages
        .mount_style(
            ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{
                    "message": { "role": "assistant", "content": null },
                    "finish_reason": "stop"
                }]
            })),
            1,
        )
        .await;
    stages.mount_review(anthropic_reply(""), 1).await;

    let chain = ReviewChain::from_config(&stages.config()).unwrap();
    let corpus = ReferenceCorpus::from_pairs([("Luigi's", "Great pasta")]);

    let output = chain.run(&corpus, &luigis_request()).await.unwrap();

    assert_eq!(output.style_profile.as_str(), "");
    assert_eq!(output.review.as_str(), "");

    let reviews = request_bodies(&stages.review).await;
    let review_prompt = reviews[0]["messages"][0]["content"].as_str().unwrap();
    assert!(review_prompt.contains("style guidelines to create a new restaurant review:\n\n``````"));
}
