//! Multi-modal synthesis engine

use super::strategies;
use super::strategy::MultiModalStrategy;
use crate::contribution::entities::Contribution;
use crate::contribution::metadata::{MetadataValue, metadata};
use crate::contribution::modality::Modality;
use crate::synthesis::engine::screen;
use crate::synthesis::result::{MergeResult, keys};
use crate::synthesis::strategies::Merged;
use crate::util::now_millis;
use crate::validation::validator::{ModalityValidator, Validator};
use tracing::{info, warn};

/// Modality-aware engine: validates per declared modality, resolves the
/// output modality, then merges with one [`MultiModalStrategy`].
pub struct MultiModalSynthesisEngine {
    validator: Box<dyn Validator>,
}

impl MultiModalSynthesisEngine {
    pub fn new() -> Self {
        Self::with_validator(ModalityValidator::new())
    }

    pub fn with_validator(validator: impl Validator + 'static) -> Self {
        Self {
            validator: Box::new(validator),
        }
    }

    pub fn merge_contributions(
        &self,
        contributions: &[Contribution],
        strategy: &MultiModalStrategy,
        context: &str,
    ) -> MergeResult {
        if contributions.is_empty() {
            return MergeResult::no_contributions(strategy.as_str())
                .with_output_modality(Modality::Text);
        }

        let screened = screen(self.validator.as_ref(), contributions, context);
        if screened.valid.is_empty() {
            info!(
                strategy = %strategy,
                total = contributions.len(),
                "No multi-modal contribution passed validation"
            );
            return MergeResult::no_valid(
                strategy.as_str(),
                contributions.len(),
                screened.validation_results,
            )
            .with_output_modality(Modality::Text);
        }

        let input_modalities: Vec<Modality> = screened.valid.iter().map(|c| c.modality()).collect();
        let output_modality = Modality::resolve_output(input_modalities.iter().copied());
        let merged = Self::apply(strategy, &screened.valid);

        info!(
            strategy = %strategy,
            total = contributions.len(),
            valid = screened.valid.len(),
            output = %output_modality,
            confidence = merged.confidence,
            "Merged multi-modal contributions"
        );

        let tags: Vec<&str> = input_modalities.iter().map(|m| m.as_str()).collect();

        MergeResult {
            strategy: strategy.as_str().to_string(),
            merged_content: merged.content,
            contributing_agents: screened.contributing_agents(),
            confidence_score: merged.confidence.clamp(0.0, 1.0),
            metadata: metadata([
                (keys::TOTAL_CONTRIBUTIONS, MetadataValue::from(contributions.len())),
                (keys::VALID_CONTRIBUTIONS, MetadataValue::from(screened.valid.len())),
                (keys::STRATEGY, MetadataValue::from(strategy.as_str())),
                (keys::INPUT_MODALITIES, MetadataValue::from(tags)),
            ]),
            validation_results: screened.validation_results,
            timestamp: now_millis(),
            output_modality: Some(output_modality),
        }
    }

    fn apply(strategy: &MultiModalStrategy, valid: &[&Contribution]) -> Merged {
        match strategy {
            MultiModalStrategy::CrossModalSynthesis => strategies::cross_modal_synthesis(valid),
            MultiModalStrategy::ModalitySpecific => strategies::modality_specific(valid),
            MultiModalStrategy::MultimodalConsensus => strategies::multimodal_consensus(valid),
            MultiModalStrategy::Unrecognized(tag) => {
                warn!(strategy = %tag, "Unknown multi-modal strategy, merging text only");
                strategies::text_synthesis(valid)
            }
        }
    }
}

impl Default for MultiModalSynthesisEngine {
    fn default() -> Self {
        Self::new()
    }
}
