//! Feed service
//!
//! Turns a list of interest topics into a cited news summary: one grounded
//! generation request, one citation splice, one string back.
//!
//! There is deliberately no recovery in here. Service failures and
//! malformed grounding go straight back to the caller, which owns whatever
//! the user gets to see instead.

use std::sync::Arc;

use crate::app::citation_splicer::splice_citations;
use crate::domain::entities::{GroundedText, InterestList};
use crate::domain::ports::{GenerateContentRequest, GenerationService, InterestSource};
use crate::error::FeedError;

const PROMPT_PREFIX: &str = "Find and summarize the latest news in the following categories: ";
const PROMPT_SUFFIX: &str = " Try to find seperate sources for each topic, and find only news from within the last 24 hours.";

/// Build the summarization prompt for `interests`
pub fn build_prompt(interests: &InterestList) -> String {
    format!(
        "{}{}{}",
        PROMPT_PREFIX,
        interests.topics().join(", "),
        PROMPT_SUFFIX
    )
}

/// Service for generating the news feed
pub struct FeedService<GS, IS>
where
    GS: GenerationService,
    IS: InterestSource,
{
    generator: Arc<GS>,
    interests: Arc<IS>,
    model: String,
}

impl<GS, IS> FeedService<GS, IS>
where
    GS: GenerationService,
    IS: InterestSource,
{
    pub fn new(generator: Arc<GS>, interests: Arc<IS>, model: impl Into<String>) -> Self {
        Self {
            generator,
            interests,
            model: model.into(),
        }
    }

    /// Load topics from the interest source, falling back to the default
    /// two topics when the source has none, then fetch.
    pub async fn load_and_fetch(&self) -> Result<String, FeedError> {
        let interests = match self.interests.load()? {
            Some(list) => list,
            None => {
                tracing::info!("No interest list found, using defaults");
                InterestList::default()
            }
        };

        self.fetch_feed(&interests).await
    }

    /// Fetch a cited summary for `interests`
    pub async fn fetch_feed(&self, interests: &InterestList) -> Result<String, FeedError> {
        let prompt = build_prompt(interests);
        let request = GenerateContentRequest::grounded(prompt);

        tracing::debug!(
            model = %self.model,
            topics = interests.len(),
            "Requesting grounded summary"
        );

        let response = self
            .generator
            .generate_content(&self.model, &request)
            .await
            .map_err(|e| {
                tracing::error!("Generation request failed: {}", e);
                e
            })?;

        let grounded = GroundedText::try_from(&response).map_err(|e| {
            tracing::error!("Unusable grounding in response: {}", e);
            e
        })?;

        tracing::debug!(
            supports = grounded.supports.len(),
            chunks = grounded.chunks.len(),
            "Splicing citations"
        );

        let feed = splice_citations(&grounded.text, &grounded.supports, &grounded.chunks)?;
        Ok(feed)
    }
}
