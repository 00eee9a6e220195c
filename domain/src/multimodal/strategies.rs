//! Multi-modal merge algorithms

use crate::contribution::entities::Contribution;
use crate::contribution::modality::Modality;
use crate::core::string::{char_prefix, title_case};
use crate::synthesis::strategies::{
    AGENT_DIVERSITY_CAP, Merged, average_confidence, distinct_agents, diversity_boost,
    group_ordered,
};
use crate::synthesis::tally::WordTally;
use std::collections::BTreeSet;

/// Characters of text shown per line by [`cross_modal_synthesis`]
pub const TEXT_PREVIEW_CHARS: usize = 100;

/// Number of concrete modalities, used to scale modality diversity
pub const MODALITY_COUNT: f64 = 4.0;

/// Modality group count at which the diversity bonus saturates
pub const MODALITY_DIVERSITY_CAP: f64 = 3.0;

/// Confidence of the consensus summary when no text is available
pub const NO_TEXT_CONSENSUS_CONFIDENCE: f64 = 0.5;

/// Maximum number of words listed by [`multimodal_consensus`]
pub const TOP_WORDS: usize = 10;

fn joined_agents(contributions: &[&Contribution]) -> String {
    distinct_agents(contributions)
        .into_iter()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Human-readable line for one contribution, `None` when its payload is missing
fn summary_line(contribution: &Contribution) -> Option<String> {
    let agent = contribution.agent_id();
    let modality = contribution.modality();

    match modality {
        Modality::Text if contribution.content().has_text() => Some(format!(
            "Text from {agent}: {}...",
            char_prefix(contribution.text_payload(), TEXT_PREVIEW_CHARS)
        )),
        Modality::Image | Modality::Audio | Modality::Video => {
            let path = contribution.content().path_for(modality)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Some(format!("{} from {agent}: {name}", modality.display_name()))
        }
        Modality::Text | Modality::Multimodal => None,
    }
}

/// One line per contribution, rendered by modality
pub fn cross_modal_synthesis(contributions: &[&Contribution]) -> Merged {
    let content = contributions
        .iter()
        .filter_map(|c| summary_line(c))
        .collect::<Vec<_>>()
        .join("\n");

    let modalities: BTreeSet<Modality> = contributions.iter().map(|c| c.modality()).collect();
    let modality_diversity = modalities.len() as f64 / MODALITY_COUNT;
    let agent_diversity = distinct_agents(contributions).len() as f64 / AGENT_DIVERSITY_CAP;

    Merged::new(
        content,
        (modality_diversity + agent_diversity + average_confidence(contributions)) / 3.0,
    )
}

/// One line per modality group: who contributed and how many items
pub fn modality_specific(contributions: &[&Contribution]) -> Merged {
    let groups = group_ordered(contributions.iter().map(|c| (c.modality(), *c)));

    let content = groups
        .iter()
        .map(|(modality, members)| {
            format!(
                "{} inputs from {}: {} items",
                title_case(modality.as_str()),
                joined_agents(members),
                members.len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let confidence = diversity_boost(
        average_confidence(contributions),
        groups.len(),
        MODALITY_DIVERSITY_CAP,
    )
    .min(1.0);

    Merged::new(content, confidence)
}

/// Most frequent words across text payloads.
///
/// Without any text, summarizes who contributed in which modalities.
pub fn multimodal_consensus(contributions: &[&Contribution]) -> Merged {
    let texts: Vec<&str> = contributions
        .iter()
        .filter(|c| c.content().has_text())
        .map(|c| c.text_payload())
        .collect();

    if texts.is_empty() {
        let modalities: BTreeSet<&str> = contributions.iter().map(|c| c.modality().as_str()).collect();
        return Merged::new(
            format!(
                "Multimodal consensus from {} across {} modalities",
                joined_agents(contributions),
                modalities.into_iter().collect::<Vec<_>>().join(", ")
            ),
            NO_TEXT_CONSENSUS_CONFIDENCE,
        );
    }

    let tally = WordTally::from_texts(texts);
    let top = tally.most_frequent(TOP_WORDS);
    let ratio = top.len() as f64 / tally.distinct().max(1) as f64;

    Merged::new(
        format!("Consensus points: {}", top.join(", ")),
        (ratio + average_confidence(contributions)) / 2.0,
    )
}

/// Agent-prefixed text of every text-bearing contribution
pub fn text_synthesis(contributions: &[&Contribution]) -> Merged {
    let with_text: Vec<&Contribution> = contributions
        .iter()
        .copied()
        .filter(|c| c.content().has_text())
        .collect();

    let content = with_text
        .iter()
        .map(|c| format!("[{}]: {}", c.agent_id(), c.text_payload()))
        .collect::<Vec<_>>()
        .join("\n\n");

    let confidence = diversity_boost(
        average_confidence(&with_text),
        distinct_agents(&with_text).len(),
        AGENT_DIVERSITY_CAP,
    )
    .min(1.0);

    Merged::new(content, confidence)
}
