use super::categories::EmptyResponsePolicy;
use serde::{Deserialize, Serialize};

/// Knobs for the scoring pipeline. The defaults never fabricate data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub empty_response_policy: EmptyResponsePolicy,
}

impl ScoringConfig {
    pub fn synthetic_demo() -> Self {
        Self {
            empty_response_policy: EmptyResponsePolicy::Synthesize,
        }
    }
}
