//! Content pipeline tests with a scripted generator.

mod test_utils;

use postcraft_content::{ContentPipeline, format_for_platform};
use postcraft_core::{GenerationRequest, Language, Length, Platform};
use postcraft_error::RemoteErrorKind;
use postcraft_interface::{FixedIndex, RandomSource, SeededRandom};
use postcraft_storage::HistoryStore;
use postcraft_templates::{CtaTable, TemplateBank, rendered_image_suggestions, rendered_templates};
use std::sync::Arc;
use strum::IntoEnumIterator;
use tempfile::TempDir;
use test_utils::{MockBehavior, MockGenerator};

async fn pipeline(
    generator: MockGenerator,
    random: impl RandomSource + 'static,
    dir: &TempDir,
) -> ContentPipeline<MockGenerator> {
    let history = HistoryStore::open(dir.path().join("post_history.json")).await;
    ContentPipeline::new(generator, TemplateBank::new(Arc::new(random)), history)
}

fn request(topic: &str, length: &str, platform: &str, tone: &str, language: &str) -> GenerationRequest {
    GenerationRequest::parse(topic, length, platform, tone, language).unwrap()
}

#[tokio::test]
async fn failing_remote_falls_back_for_every_combination() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pipeline = pipeline(
        MockGenerator::failing(RemoteErrorKind::Transport("connection refused".into())),
        SeededRandom::new(17),
        &dir,
    )
    .await;
    let images = rendered_image_suggestions("budgeting");

    for length in Length::iter() {
        for platform in Platform::iter() {
            for language in Language::iter() {
                let request = GenerationRequest::builder()
                    .topic("budgeting")
                    .length(length)
                    .platform(platform)
                    .tone("Casual")
                    .language(language)
                    .build()?;

                let post = pipeline.generate(&request).await?;

                assert!(!post.content().trim().is_empty());
                let [first, second] = post.image_suggestions();
                assert_ne!(first, second);
                assert!(images.contains(first) && images.contains(second));
                assert_eq!(post.metadata(), &request);
            }
        }
    }

    assert_eq!(pipeline.history(100).await.len(), 30);
    Ok(())
}

#[tokio::test]
async fn focus_short_twitter_scenario() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pipeline = pipeline(MockGenerator::timing_out(), SeededRandom::new(99), &dir).await;
    let request = request("focus", "short", "Twitter", "Friendly", "EN");
    let templates = rendered_templates("focus", Length::Short, Language::English);
    let ctas = CtaTable::builtin()
        .candidates(Language::English, Platform::Twitter)
        .to_vec();

    for _ in 0..10 {
        let post = pipeline.generate(&request).await?;

        let (body, cta) = post
            .content()
            .rsplit_once("\n\n")
            .expect("content ends with a call to action");
        assert!(templates.iter().any(|t| t == body), "unexpected body {:?}", body);
        assert!(ctas.iter().any(|c| c == cta), "unexpected cta {:?}", cta);
        assert_eq!(ctas.len(), 4);
        for suggestion in post.image_suggestions() {
            assert!(suggestion.contains("focus"));
        }
    }
    Ok(())
}

#[tokio::test]
async fn pinned_fallback_is_exact() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pipeline = pipeline(MockGenerator::timing_out(), FixedIndex(1), &dir).await;

    let post = pipeline
        .generate(&request("focus", "short", "Twitter", "Friendly", "EN"))
        .await?;

    assert_eq!(
        post.content(),
        "💡 Want to master focus? Start with this...\n\nLike & follow for more!"
    );
    assert_eq!(
        post.image_suggestions(),
        &[
            "A split image showing before/after of focus".to_string(),
            "A close-up of hands working on focus".to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn remote_text_and_images_are_used() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let generator = MockGenerator::succeeding(
        "Your focus is a muscle 💪",
        &["A desk at dawn", "Headphones on a notebook"],
    );
    let pipeline = pipeline(generator, FixedIndex(0), &dir).await;

    let post = pipeline
        .generate(&request("focus", "short", "LinkedIn", "Professional", "EN"))
        .await?;

    assert_eq!(
        post.content(),
        "Your focus is a muscle 💪\n\nWhat are your thoughts on this?"
    );
    assert_eq!(
        post.image_suggestions(),
        &["A desk at dawn".to_string(), "Headphones on a notebook".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn each_generation_calls_remote_once() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pipeline = pipeline(
        MockGenerator::failing(RemoteErrorKind::Http {
            status_code: 503,
            message: "busy".into(),
        }),
        FixedIndex(0),
        &dir,
    )
    .await;

    pipeline
        .generate(&request("sleep", "medium", "Facebook", "Calm", "EN"))
        .await?;
    pipeline
        .generate(&request("sleep", "long", "Facebook", "Calm", "EN"))
        .await?;

    assert_eq!(pipeline.generator().text_calls(), 2);
    assert_eq!(pipeline.generator().image_calls(), 2);
    Ok(())
}

#[tokio::test]
async fn prompt_budget_follows_length() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pipeline = pipeline(MockGenerator::succeeding("Text", &["a", "b"]), FixedIndex(0), &dir).await;

    for (length, tokens, seconds) in [("short", 400, 30), ("medium", 1200, 60), ("long", 2000, 90)] {
        pipeline
            .generate(&request("hydration", length, "Instagram", "Upbeat", "BM"))
            .await?;
        let prompt = pipeline.generator().prompts().pop().unwrap();
        assert_eq!(*prompt.max_tokens(), tokens);
        assert_eq!(prompt.timeout().as_secs(), seconds);
        assert!(prompt.user().contains("Write in Bahasa Malaysia"));
        assert!(prompt.user().contains("upbeat social media post about hydration"));
    }
    Ok(())
}

#[tokio::test]
async fn tiktok_formatting_is_applied_once() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let remote = "Sleep is a skill. Dim the lights early. Keep your phone away";
    let pipeline = pipeline(MockGenerator::succeeding(remote, &["a", "b"]), FixedIndex(0), &dir).await;

    let post = pipeline
        .generate(&request("sleep", "short", "TikTok", "Casual", "EN"))
        .await?;

    let expected = format!("{}\n\nFollow for more! 🎵", format_for_platform(remote, Platform::TikTok));
    assert_eq!(post.content(), &expected);

    let hashtag_lines = post
        .content()
        .lines()
        .filter(|line| line.starts_with('#'))
        .count();
    assert_eq!(hashtag_lines, 1);
    assert!(!post.content().contains(".\n\n.\n\n"));
    Ok(())
}

#[tokio::test]
async fn long_fallback_paragraphs_have_at_most_three_sentences() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pipeline = pipeline(MockGenerator::timing_out(), SeededRandom::new(4), &dir).await;

    for language in ["EN", "BM"] {
        for _ in 0..10 {
            let post = pipeline
                .generate(&request("saving money", "long", "Facebook", "Warm", language))
                .await?;
            for paragraph in post.content().split("\n\n") {
                assert!(
                    paragraph.matches(". ").count() <= 2,
                    "paragraph too long: {:?}",
                    paragraph
                );
            }
        }
    }
    Ok(())
}

#[tokio::test]
async fn long_remote_text_is_reflowed() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let remote = "One idea. Two ideas. Three ideas. Four ideas. Five ideas";
    let pipeline = pipeline(MockGenerator::succeeding(remote, &["a", "b"]), FixedIndex(0), &dir).await;

    let post = pipeline
        .generate(&request("ideas", "long", "Twitter", "Curious", "EN"))
        .await?;

    assert_eq!(
        post.content(),
        "One idea. Two ideas. Three ideas.\n\nFour ideas. Five ideas.\n\nRT if you agree!"
    );
    Ok(())
}

#[tokio::test]
async fn tone_does_not_change_fallback_content() -> anyhow::Result<()> {
    // Fallback copy is tone-agnostic; only the remote prompt sees the tone.
    let dir = TempDir::new()?;
    let pipeline = pipeline(MockGenerator::timing_out(), FixedIndex(2), &dir).await;

    let calm = pipeline
        .generate(&request("running", "medium", "Instagram", "Calm", "EN"))
        .await?;
    let angry = pipeline
        .generate(&request("running", "medium", "Instagram", "Furious", "EN"))
        .await?;

    assert_eq!(calm.content(), angry.content());
    assert_eq!(calm.image_suggestions(), angry.image_suggestions());
    Ok(())
}

#[tokio::test]
async fn short_image_reply_uses_fallback() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let generator = MockGenerator::new(
        MockBehavior::Success("Remote body".to_string()),
        MockBehavior::Success(vec!["Only one".to_string(), "   ".to_string()]),
    );
    let pipeline = pipeline(generator, FixedIndex(0), &dir).await;

    let post = pipeline
        .generate(&request("yoga", "short", "Facebook", "Calm", "EN"))
        .await?;

    assert_eq!(
        post.image_suggestions(),
        &[
            "A person looking determined while working on yoga".to_string(),
            "A split image showing before/after of yoga".to_string(),
        ]
    );
    assert!(post.content().starts_with("Remote body\n\n"));
    Ok(())
}

#[tokio::test]
async fn unsent_request_falls_back_like_any_remote_failure() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let generator =
        MockGenerator::failing(RemoteErrorKind::InvalidRequest("`model` must be initialized".into()));
    let pipeline = pipeline(generator.clone(), FixedIndex(1), &dir).await;

    let post = pipeline
        .generate(&request("focus", "short", "Twitter", "Friendly", "EN"))
        .await?;

    assert_eq!(
        post.content(),
        "💡 Want to master focus? Start with this...\n\nLike & follow for more!"
    );
    assert_eq!(generator.text_calls(), 1);
    assert_eq!(generator.image_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn blank_remote_text_uses_template() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pipeline = pipeline(MockGenerator::succeeding("   ", &["a", "b"]), FixedIndex(0), &dir).await;

    let post = pipeline
        .generate(&request("tidur", "short", "Facebook", "Santai", "BM"))
        .await?;

    assert_eq!(
        post.content(),
        "✨ Bermasalah dengan tidur? Ini yang anda perlu tahu...\n\n💬 Apa pendapat anda?"
    );
    Ok(())
}

#[tokio::test]
async fn history_keeps_order_and_survives_restart() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("post_history.json");
    {
        let pipeline = pipeline(MockGenerator::timing_out(), FixedIndex(0), &dir).await;
        for topic in ["first", "second", "third"] {
            pipeline
                .generate(&request(topic, "short", "Twitter", "Casual", "EN"))
                .await?;
        }

        let recent: Vec<_> = pipeline
            .history(2)
            .await
            .into_iter()
            .map(|post| post.metadata().topic.clone())
            .collect();
        assert_eq!(recent, ["second", "third"]);
    }

    let reloaded = ContentPipeline::new(
        MockGenerator::timing_out(),
        TemplateBank::new(Arc::new(FixedIndex(0))),
        HistoryStore::open(&path).await,
    );
    let topics: Vec<_> = reloaded
        .history(10)
        .await
        .into_iter()
        .map(|post| post.metadata().topic.clone())
        .collect();
    assert_eq!(topics, ["first", "second", "third"]);

    reloaded.clear_history().await?;
    assert!(reloaded.history(10).await.is_empty());
    assert!(HistoryStore::open(&path).await.is_empty());
    Ok(())
}

#[tokio::test]
async fn concurrent_generations_are_all_recorded() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pipeline = pipeline(MockGenerator::timing_out(), SeededRandom::new(8), &dir).await;
    let a = request("a-topic", "short", "Twitter", "Casual", "EN");
    let b = request("b-topic", "medium", "TikTok", "Casual", "BM");
    let c = request("c-topic", "long", "LinkedIn", "Casual", "EN");

    let (ra, rb, rc) = tokio::join!(
        pipeline.generate(&a),
        pipeline.generate(&b),
        pipeline.generate(&c)
    );
    ra?;
    rb?;
    rc?;

    assert_eq!(pipeline.history(10).await.len(), 3);
    let reloaded = HistoryStore::open(dir.path().join("post_history.json")).await;
    assert_eq!(reloaded.len(), 3);
    Ok(())
}

#[tokio::test]
async fn unwritable_history_does_not_fail_generation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file in the way")?;

    let pipeline = ContentPipeline::new(
        MockGenerator::timing_out(),
        TemplateBank::new(Arc::new(FixedIndex(0))),
        HistoryStore::open(blocker.join("post_history.json")).await,
    );

    let post = pipeline
        .generate(&request("focus", "short", "Twitter", "Calm", "EN"))
        .await?;

    assert!(!post.content().is_empty());
    assert_eq!(pipeline.history(10).await.len(), 1);
    assert!(pipeline.clear_history().await.is_err());
    Ok(())
}
