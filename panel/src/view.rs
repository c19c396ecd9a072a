//! Fetch the feed and put it on a display surface
//!
//! The feed core never degrades: it hands back the cited text or an error.
//! Turning an error into something the user can read happens here.

use anyhow::{Context, Result};
use myfeed::{DisplaySurface, FeedService, GenerationService, InterestSource};

pub const LOADING_TEXT: &str = "Loading your feed...";

/// Show a loading body, then replace it with the feed or with the error.
///
/// The error is still returned so the process exits non-zero.
pub async fn show_feed<GS, IS, DS>(service: &FeedService<GS, IS>, surface: &mut DS) -> Result<()>
where
    GS: GenerationService,
    IS: InterestSource,
    DS: DisplaySurface,
{
    surface
        .render(LOADING_TEXT)
        .context("Failed to draw panel")?;

    match service.load_and_fetch().await {
        Ok(feed) => {
            tracing::info!(bytes = feed.len(), "Feed ready");
            surface
                .update_content(&feed)
                .context("Failed to draw feed")?;
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to fetch feed: {}", e);
            surface
                .update_content(&error_text(&e))
                .context("Failed to draw error")?;
            Err(e).context("Failed to fetch feed")
        }
    }
}

fn error_text(error: &myfeed::FeedError) -> String {
    format!("**Could not load your feed.**\n\n{}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    use async_trait::async_trait;
    use myfeed::domain::ports::{GenerateContentRequest, GenerateContentResponse};
    use myfeed::{GenerationError, InterestError, InterestList};

    struct StubGenerator(serde_json::Value);

    #[async_trait]
    impl GenerationService for StubGenerator {
        async fn generate_content(
            &self,
            _model: &str,
            _request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, GenerationError> {
            if self.0.is_null() {
                return Err(GenerationError::RateLimited);
            }
            Ok(serde_json::from_value(self.0.clone()).unwrap())
        }
    }

    struct NoInterests;

    impl InterestSource for NoInterests {
        fn load(&self) -> Result<Option<InterestList>, InterestError> {
            Ok(None)
        }
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(&'static str, String)>,
    }

    impl DisplaySurface for Recorder {
        fn render(&mut self, text: &str) -> io::Result<()> {
            self.calls.push(("render", text.to_string()));
            Ok(())
        }

        fn update_content(&mut self, text: &str) -> io::Result<()> {
            self.calls.push(("update", text.to_string()));
            Ok(())
        }
    }

    fn service(body: serde_json::Value) -> FeedService<StubGenerator, NoInterests> {
        FeedService::new(Arc::new(StubGenerator(body)), Arc::new(NoInterests), "m")
    }

    #[tokio::test]
    async fn loading_then_feed() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "Sun rises. Moon sets."}]},
                "groundingMetadata": {
                    "groundingChunks": [{"web": {"uri": "http://x"}}],
                    "groundingSupports": [{"segment": {"endIndex": 10}, "groundingChunkIndices": [0]}]
                }
            }]
        });
        let mut surface = Recorder::default();

        show_feed(&service(body), &mut surface).await.unwrap();

        assert_eq!(
            surface.calls,
            vec![
                ("render", LOADING_TEXT.to_string()),
                ("update", "Sun rises.[1](http://x) Moon sets.".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn loading_then_error() {
        let mut surface = Recorder::default();

        let result = show_feed(&service(serde_json::Value::Null), &mut surface).await;

        assert!(result.is_err());
        assert_eq!(surface.calls.len(), 2);
        assert_eq!(surface.calls[1].0, "update");
        assert!(surface.calls[1].1.starts_with("**Could not load your feed.**"));
        assert!(surface.calls[1].1.contains("Rate limited"));
    }
}
