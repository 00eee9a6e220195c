//! Built-in demonstration scenario
//!
//! Registers four sample agents, submits contributions about a user
//! authentication system and merges them with every strategy (or just the
//! requested one). The multi-modal variant also writes placeholder media
//! files into a temporary directory.

use anyhow::{Context, Result};
use merge_application::MergeRegistry;
use merge_domain::contribution::metadata::metadata;
use merge_domain::{Agent, MergeResult, MergeStrategy, Modality, MultiModalStrategy};
use std::path::Path;
use tracing::info;

pub const DEMO_CONTEXT: &str = "Implementing user authentication system";

fn demo_agents(multimodal: bool) -> Vec<Agent> {
    let agents = vec![
        Agent::new("claude-001", "Claude", 0.9)
            .with_capabilities(["analysis", "reasoning", "documentation"])
            .with_specialty("complex reasoning")
            .with_response_time_ms(1200),
        Agent::new("cursor-001", "Cursor", 0.85)
            .with_capabilities(["coding", "debugging", "IDE integration"])
            .with_specialty("code generation")
            .with_response_time_ms(800),
        Agent::new("gemini-001", "Gemini", 0.88)
            .with_capabilities(["research", "creativity", "multimodal"])
            .with_specialty("research and creativity")
            .with_response_time_ms(1000),
        Agent::new("qwen-001", "Qwen", 0.82)
            .with_capabilities(["coding", "multilingual", "technical"])
            .with_specialty("technical solutions")
            .with_response_time_ms(900),
    ];

    if !multimodal {
        return agents;
    }

    agents
        .into_iter()
        .map(|agent| match agent.id.as_str() {
            "claude-001" => agent.with_modalities([Modality::Text, Modality::Image]),
            "gemini-001" => agent.with_modalities(Modality::CONCRETE),
            _ => agent,
        })
        .collect()
}

const TEXT_CONTRIBUTIONS: [(&str, &str, &str); 5] = [
    (
        "claude-001",
        "For implementing user authentication, we should consider security best practices including password hashing, secure session management, and protection against common attacks like CSRF and XSS.",
        "security",
    ),
    (
        "cursor-001",
        "Here's a basic structure for an authentication controller with login and logout methods. I'll include proper error handling and input validation.",
        "implementation",
    ),
    (
        "gemini-001",
        "Authentication systems should also consider user experience aspects like password reset flows, account recovery, and accessibility requirements.",
        "ux",
    ),
    (
        "qwen-001",
        "From a technical perspective, we should use industry-standard libraries for JWT handling and consider rate limiting to prevent brute force attacks.",
        "technical",
    ),
    (
        "claude-001",
        "Don't forget about compliance requirements like GDPR for data protection and audit logging for security monitoring.",
        "compliance",
    ),
];

/// Media placeholders: (agent, modality, file name, size in bytes)
const MEDIA_FILES: [(&str, Modality, &str, usize); 3] = [
    ("claude-001", Modality::Image, "login_flow_diagram.png", 4 * 1024),
    ("gemini-001", Modality::Audio, "security_briefing.mp3", 16 * 1024),
    ("gemini-001", Modality::Video, "onboarding_walkthrough.mp4", 64 * 1024),
];

/// Register the demo agents and submit the demo contributions
pub fn populate(registry: &MergeRegistry, media_dir: Option<&Path>) -> Result<()> {
    for agent in demo_agents(media_dir.is_some()) {
        registry.register_agent(agent)?;
    }

    for (agent_id, text, aspect) in TEXT_CONTRIBUTIONS {
        registry.submit_text(agent_id, text, metadata([("aspect", aspect)]))?;
    }

    if let Some(dir) = media_dir {
        for (agent_id, modality, name, size) in MEDIA_FILES {
            let path = dir.join(name);
            std::fs::write(&path, vec![0u8; size])
                .with_context(|| format!("Failed to write demo file {}", path.display()))?;

            let meta = metadata([("aspect", "media"), ("file", name)]);
            match modality {
                Modality::Image => registry.submit_image(agent_id, &path, meta)?,
                Modality::Audio => registry.submit_audio(agent_id, &path, meta)?,
                _ => registry.submit_video(agent_id, &path, meta)?,
            };
        }
    }

    info!(contributions = registry.len(), "Demo contributions submitted");
    Ok(())
}

/// Run the text scenario: one result per strategy
pub fn run_text(registry: &MergeRegistry, only: Option<MergeStrategy>) -> Result<Vec<MergeResult>> {
    populate(registry, None)?;

    let strategies = match only {
        Some(strategy) => vec![strategy],
        None => MergeStrategy::ALL.to_vec(),
    };
    Ok(strategies
        .iter()
        .map(|strategy| registry.merge_all(strategy, DEMO_CONTEXT))
        .collect())
}

/// Run the multi-modal scenario with generated media files
pub fn run_multimodal(
    registry: &MergeRegistry,
    only: Option<MultiModalStrategy>,
) -> Result<Vec<MergeResult>> {
    let dir = tempfile::tempdir().context("Failed to create demo media directory")?;
    populate(registry, Some(dir.path()))?;

    let strategies = match only {
        Some(strategy) => vec![strategy],
        None => MultiModalStrategy::ALL.to_vec(),
    };
    // Merge while the media files still exist; validation stats them.
    Ok(strategies
        .iter()
        .map(|strategy| registry.merge_all_multimodal(strategy, DEMO_CONTEXT))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use merge_application::NoEventLog;
    use std::sync::Arc;

    #[test]
    fn test_text_demo_runs_every_strategy() {
        let registry = MergeRegistry::new(Arc::new(NoEventLog));
        let results = run_text(&registry, None).unwrap();

        let strategies: Vec<&str> = results.iter().map(|r| r.strategy.as_str()).collect();
        assert_eq!(
            strategies,
            vec!["synthesis", "consensus", "complementary", "competitive_evaluation"]
        );
        for result in &results {
            assert!(result.has_contributions());
            assert!((0.0..=1.0).contains(&result.confidence_score));
        }
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_multimodal_demo_resolves_to_video() {
        let registry = MergeRegistry::new(Arc::new(NoEventLog));
        let results =
            run_multimodal(&registry, Some(MultiModalStrategy::CrossModalSynthesis)).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].output_modality, Some(Modality::Video));
        assert_eq!(registry.contributions_by_modality(Modality::Audio).len(), 1);
        assert!(results[0].merged_content.contains("Video from gemini-001"));
    }
}
