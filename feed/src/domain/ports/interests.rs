//! Interest source port trait

use crate::domain::entities::InterestList;
use crate::error::InterestError;

/// Where the topic list comes from
pub trait InterestSource: Send + Sync {
    /// `Ok(None)` means no list is configured and the caller picks a default.
    fn load(&self) -> Result<Option<InterestList>, InterestError>;
}
