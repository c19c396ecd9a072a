//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing and
//! record what they were asked to do.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::domain::entities::InterestList;
use crate::domain::ports::{
    GenerateContentRequest, GenerateContentResponse, GenerationService, InterestSource,
};
use crate::error::{GenerationError, InterestError};

// ============================================================================
// Mock Generation Service
// ============================================================================

type Call = (String, GenerateContentRequest);

/// Replies with queued results in order. Runs dry with a 500.
#[derive(Default)]
pub struct MockGenerationService {
    replies: Arc<RwLock<VecDeque<Result<GenerateContentResponse, GenerationError>>>>,
    calls: Arc<RwLock<Vec<Call>>>,
}

impl MockGenerationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.replies.write().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a failure
    pub fn with_error(self, error: GenerationError) -> Self {
        self.replies.write().unwrap().push_back(Err(error));
        self
    }

    /// Every (model, request) pair seen so far
    pub fn calls(&self) -> Vec<Call> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl GenerationService for MockGenerationService {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        self.calls
            .write()
            .unwrap()
            .push((model.to_string(), request.clone()));

        self.replies
            .write()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(GenerationError::Api {
                    status: 500,
                    message: "no mock response queued".to_string(),
                })
            })
    }
}

// ============================================================================
// Fixed Interest Source
// ============================================================================

enum Fixed {
    None,
    List(InterestList),
    Failing,
}

pub struct FixedInterestSource(Fixed);

impl FixedInterestSource {
    /// A source with nothing configured
    pub fn none() -> Self {
        Self(Fixed::None)
    }

    pub fn with(list: InterestList) -> Self {
        Self(Fixed::List(list))
    }

    /// A source whose backing file cannot be read
    pub fn failing() -> Self {
        Self(Fixed::Failing)
    }
}

impl InterestSource for FixedInterestSource {
    fn load(&self) -> Result<Option<InterestList>, InterestError> {
        match &self.0 {
            Fixed::None => Ok(None),
            Fixed::List(list) => Ok(Some(list.clone())),
            Fixed::Failing => Err(InterestError::Io {
                path: PathBuf::from("interests.txt"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            }),
        }
    }
}
