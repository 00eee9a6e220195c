//! Merge settings: registry behavior control.
//!
//! [`MergeSettings`] groups the static parameters the registry applies to
//! every merge it runs on its own (default strategy, default context,
//! automatic merging) and whether contributions are validated at all.

use merge_domain::{MergeStrategy, MultiModalStrategy};

/// Registry behavior parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSettings {
    /// Strategy used by automatic merges and by callers that don't pick one.
    pub default_strategy: MergeStrategy,
    /// Strategy used for multi-modal merges when none is given.
    pub default_multimodal_strategy: MultiModalStrategy,
    /// Context passed to validation when none is given.
    pub default_context: String,
    /// Merge automatically after this many submissions (0 disables).
    pub auto_merge_threshold: usize,
    /// Run the validators; when false every contribution is accepted.
    pub validation_enabled: bool,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            default_strategy: MergeStrategy::Synthesis,
            default_multimodal_strategy: MultiModalStrategy::CrossModalSynthesis,
            default_context: String::new(),
            auto_merge_threshold: 0,
            validation_enabled: true,
        }
    }
}

impl MergeSettings {
    // ==================== Builder Methods ====================

    pub fn with_default_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.default_strategy = strategy;
        self
    }

    pub fn with_default_multimodal_strategy(mut self, strategy: MultiModalStrategy) -> Self {
        self.default_multimodal_strategy = strategy;
        self
    }

    pub fn with_default_context(mut self, context: impl Into<String>) -> Self {
        self.default_context = context.into();
        self
    }

    pub fn with_auto_merge_threshold(mut self, threshold: usize) -> Self {
        self.auto_merge_threshold = threshold;
        self
    }

    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validation_enabled = enabled;
        self
    }

    /// Whether `pending` submissions since the last merge call for an automatic merge
    pub fn auto_merge_due(&self, pending: usize) -> bool {
        self.auto_merge_threshold > 0 && pending >= self.auto_merge_threshold
    }
}
