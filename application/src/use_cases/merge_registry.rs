//! Merge registry use case
//!
//! Owns registered agents and submitted contributions, and runs merges over
//! them. Every operation takes one exclusive lock for its whole duration,
//! including the event-log append, so a merge and the record of that merge
//! can never interleave with another operation.

use crate::config::MergeSettings;
use crate::ports::event_log::{EventLog, MergeEvent};
use merge_domain::{
    AcceptAllValidator, Agent, Content, Contribution, DomainError, MergeResult, MergeStrategy,
    Metadata, Modality, MultiModalStrategy, MultiModalSynthesisEngine, SynthesisEngine,
};
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when registering agents or submitting contributions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Agent {0} not registered")]
    UnknownAgent(String),

    #[error("Agent {agent_id} does not support {modality} modality")]
    UnsupportedModality { agent_id: String, modality: Modality },

    #[error("Declared {declared} modality but the payload is {payload}")]
    PayloadMismatch {
        declared: Modality,
        payload: Modality,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl RegistryError {
    /// Check if the submission named an agent that was never registered
    pub fn is_unknown_agent(&self) -> bool {
        matches!(self, RegistryError::UnknownAgent(_))
    }
}

#[derive(Default)]
struct RegistryState {
    agents: BTreeMap<String, Agent>,
    submission_counts: BTreeMap<String, usize>,
    contributions: Vec<Contribution>,
    /// Submissions since the last merge over the whole store
    pending: usize,
    last_auto_merge: Option<MergeResult>,
}

/// Agent and contribution store with merge operations.
///
/// # Example
///
/// ```
/// use merge_application::{MergeRegistry, NoEventLog};
/// use merge_domain::{Agent, Metadata, MergeStrategy};
/// use std::sync::Arc;
///
/// let registry = MergeRegistry::new(Arc::new(NoEventLog));
/// registry.register_agent(Agent::new("claude-001", "Claude", 0.92)).unwrap();
/// registry
///     .submit_text("claude-001", "Hash passwords with bcrypt and a per-user salt.", Metadata::new())
///     .unwrap();
///
/// let result = registry.merge_all(&MergeStrategy::Synthesis, "");
/// assert_eq!(result.contributing_agents, vec!["claude-001"]);
/// ```
pub struct MergeRegistry {
    state: Mutex<RegistryState>,
    engine: SynthesisEngine,
    multimodal_engine: MultiModalSynthesisEngine,
    event_log: Arc<dyn EventLog>,
    settings: MergeSettings,
}

impl MergeRegistry {
    pub fn new(event_log: Arc<dyn EventLog>) -> Self {
        Self::with_settings(event_log, MergeSettings::default())
    }

    pub fn with_settings(event_log: Arc<dyn EventLog>, settings: MergeSettings) -> Self {
        let (engine, multimodal_engine) = if settings.validation_enabled {
            (SynthesisEngine::new(), MultiModalSynthesisEngine::new())
        } else {
            (
                SynthesisEngine::with_validator(AcceptAllValidator),
                MultiModalSynthesisEngine::with_validator(AcceptAllValidator),
            )
        };

        Self {
            state: Mutex::new(RegistryState::default()),
            engine,
            multimodal_engine,
            event_log,
            settings,
        }
    }

    pub fn settings(&self) -> &MergeSettings {
        &self.settings
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        // State stays consistent even if a holder panicked: every mutation is
        // a single push/insert/clear.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ==================== Agents ====================

    /// Register an agent, replacing any agent with the same id
    pub fn register_agent(&self, agent: Agent) -> Result<(), RegistryError> {
        agent.validate()?;

        let mut state = self.lock();
        let event = MergeEvent::agent_registered(&agent, state.agents.contains_key(&agent.id));
        info!(agent_id = %agent.id, name = %agent.name, "Registered agent");
        state.agents.insert(agent.id.clone(), agent);
        self.event_log.append(event);
        Ok(())
    }

    /// Registered agents, sorted by id
    pub fn agents(&self) -> Vec<Agent> {
        self.lock().agents.values().cloned().collect()
    }

    pub fn agent(&self, agent_id: &str) -> Option<Agent> {
        self.lock().agents.get(agent_id).cloned()
    }

    /// Number of contributions an agent has submitted since registration
    /// (not reset by [`clear_contributions`](Self::clear_contributions))
    pub fn submission_count(&self, agent_id: &str) -> usize {
        self.lock()
            .submission_counts
            .get(agent_id)
            .copied()
            .unwrap_or(0)
    }

    // ==================== Submission ====================

    pub fn submit_text(
        &self,
        agent_id: &str,
        text: impl Into<String>,
        metadata: Metadata,
    ) -> Result<String, RegistryError> {
        self.submit(agent_id, Content::text(text), Modality::Text, metadata)
    }

    /// Submit content in a modality the agent declared support for.
    ///
    /// `modality` must match the payload's primary modality.
    pub fn submit(
        &self,
        agent_id: &str,
        content: Content,
        modality: Modality,
        metadata: Metadata,
    ) -> Result<String, RegistryError> {
        self.submit_inner(agent_id, content, modality, metadata)
    }

    pub fn submit_image(
        &self,
        agent_id: &str,
        path: impl Into<PathBuf>,
        metadata: Metadata,
    ) -> Result<String, RegistryError> {
        self.submit(agent_id, Content::image(path), Modality::Image, metadata)
    }

    pub fn submit_audio(
        &self,
        agent_id: &str,
        path: impl Into<PathBuf>,
        metadata: Metadata,
    ) -> Result<String, RegistryError> {
        self.submit(agent_id, Content::audio(path), Modality::Audio, metadata)
    }

    pub fn submit_video(
        &self,
        agent_id: &str,
        path: impl Into<PathBuf>,
        metadata: Metadata,
    ) -> Result<String, RegistryError> {
        self.submit(agent_id, Content::video(path), Modality::Video, metadata)
    }

    fn submit_inner(
        &self,
        agent_id: &str,
        content: Content,
        modality: Modality,
        metadata: Metadata,
    ) -> Result<String, RegistryError> {
        let mut state = self.lock();

        let agent = state
            .agents
            .get(agent_id)
            .ok_or_else(|| RegistryError::UnknownAgent(agent_id.to_string()))?;
        if !agent.supports(modality) {
            return Err(RegistryError::UnsupportedModality {
                agent_id: agent_id.to_string(),
                modality,
            });
        }
        // Empty text has no primary modality of its own
        let payload = content.primary_modality();
        if payload != modality && !(modality == Modality::Text && payload == Modality::Multimodal) {
            return Err(RegistryError::PayloadMismatch {
                declared: modality,
                payload,
            });
        }

        let contribution =
            Contribution::new(agent_id, content, modality, agent.confidence).with_metadata(metadata);
        let hash = contribution.hash().to_string();
        debug!(agent_id, %modality, hash = %hash, "Contribution submitted");

        self.event_log
            .append(MergeEvent::contribution_submitted(&contribution));
        state.contributions.push(contribution);
        *state
            .submission_counts
            .entry(agent_id.to_string())
            .or_default() += 1;
        state.pending += 1;

        if self.settings.auto_merge_due(state.pending) {
            self.auto_merge_locked(&mut state);
        }

        Ok(hash)
    }

    // ==================== Merging ====================

    /// Merge every stored contribution with a text strategy
    pub fn merge_all(&self, strategy: &MergeStrategy, context: &str) -> MergeResult {
        let mut state = self.lock();
        self.merge_all_locked(&mut state, strategy, context)
    }

    /// Merge the stored contributions whose hash is in `hashes`
    pub fn merge_subset<S: AsRef<str>>(
        &self,
        hashes: &[S],
        strategy: &MergeStrategy,
        context: &str,
    ) -> MergeResult {
        let state = self.lock();

        let wanted: HashSet<&str> = hashes.iter().map(AsRef::as_ref).collect();
        let selected: Vec<Contribution> = state
            .contributions
            .iter()
            .filter(|c| wanted.contains(c.hash()))
            .cloned()
            .collect();

        let result = if selected.is_empty() {
            MergeResult::no_matching(strategy.as_str())
        } else {
            self.engine.merge_contributions(&selected, strategy, context)
        };

        self.event_log
            .append(MergeEvent::subset_merge_completed(&result, selected.len()));
        result
    }

    /// Merge every stored contribution with the multi-modal engine
    pub fn merge_all_multimodal(&self, strategy: &MultiModalStrategy, context: &str) -> MergeResult {
        let mut state = self.lock();
        self.merge_multimodal_locked(&mut state, strategy, context)
    }

    /// Result of the most recent automatic merge, if one has run
    pub fn last_auto_merge(&self) -> Option<MergeResult> {
        self.lock().last_auto_merge.clone()
    }

    fn merge_all_locked(
        &self,
        state: &mut RegistryState,
        strategy: &MergeStrategy,
        context: &str,
    ) -> MergeResult {
        let result = self
            .engine
            .merge_contributions(&state.contributions, strategy, context);
        self.event_log
            .append(MergeEvent::merge_completed(&result, state.contributions.len()));
        state.pending = 0;
        result
    }

    fn merge_multimodal_locked(
        &self,
        state: &mut RegistryState,
        strategy: &MultiModalStrategy,
        context: &str,
    ) -> MergeResult {
        let result = self
            .multimodal_engine
            .merge_contributions(&state.contributions, strategy, context);
        self.event_log
            .append(MergeEvent::merge_completed(&result, state.contributions.len()));
        state.pending = 0;
        result
    }

    /// Merge with the configured defaults; media in the store selects the
    /// multi-modal engine
    fn auto_merge_locked(&self, state: &mut RegistryState) {
        let context = self.settings.default_context.as_str();
        let has_media = state.contributions.iter().any(|c| c.modality().is_media());

        let result = if has_media {
            self.merge_multimodal_locked(state, &self.settings.default_multimodal_strategy, context)
        } else {
            self.merge_all_locked(state, &self.settings.default_strategy, context)
        };

        info!(
            strategy = %result.strategy,
            confidence = result.confidence_score,
            "Automatic merge completed"
        );
        state.last_auto_merge = Some(result);
    }

    // ==================== Queries ====================

    /// Snapshot of every stored contribution, in submission order
    pub fn contributions(&self) -> Vec<Contribution> {
        self.lock().contributions.clone()
    }

    pub fn contributions_by_agent(&self, agent_id: &str) -> Vec<Contribution> {
        self.lock()
            .contributions
            .iter()
            .filter(|c| c.agent_id() == agent_id)
            .cloned()
            .collect()
    }

    pub fn contributions_by_modality(&self, modality: Modality) -> Vec<Contribution> {
        self.lock()
            .contributions
            .iter()
            .filter(|c| c.modality() == modality)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lock().contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().contributions.is_empty()
    }

    /// Drop every contribution; agents stay registered
    pub fn clear_contributions(&self) {
        let mut state = self.lock();
        let removed = state.contributions.len();
        state.contributions.clear();
        state.pending = 0;
        info!(removed, "Cleared contributions");
        self.event_log
            .append(MergeEvent::contributions_cleared(removed));
    }
}
