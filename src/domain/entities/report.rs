//! Chart-shaped analysis payload.
//!
//! The field names follow what a Chart.js pie chart expects, so the whole
//! struct tree serializes in camelCase.

use crate::domain::entities::document::SimilarDocument;
use serde::{Deserialize, Serialize};

const BACKGROUND_COLORS: [&str; 5] = [
    "rgba(136, 192, 208, 0.8)",
    "rgba(163, 190, 140, 0.8)",
    "rgba(180, 142, 173, 0.8)",
    "rgba(235, 203, 139, 0.8)",
    "rgba(191, 97, 106, 0.8)",
];

const BORDER_COLORS: [&str; 5] = [
    "rgba(136, 192, 208, 1)",
    "rgba(163, 190, 140, 1)",
    "rgba(180, 142, 173, 1)",
    "rgba(235, 203, 139, 1)",
    "rgba(191, 97, 106, 1)",
];

pub const FALLBACK_LABELS: [&str; 2] = ["No Keywords", "Generic Data"];
pub const FALLBACK_VALUES: [f64; 2] = [50.0, 50.0];

/// Quality is not computed; every report carries this label.
pub const SIMULATED_QUALITY: &str = "Excellent (Simulated)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDistribution {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl KeywordDistribution {
    /// One slice per match, labelled by document id and sized by the score
    /// as a percentage. With no matches, a fixed 50/50 placeholder is used.
    pub fn from_matches(matches: &[SimilarDocument]) -> Self {
        let (labels, data): (Vec<String>, Vec<f64>) = if matches.is_empty() {
            (
                FALLBACK_LABELS.iter().map(|l| l.to_string()).collect(),
                FALLBACK_VALUES.to_vec(),
            )
        } else {
            matches
                .iter()
                .map(|m| (format!("Doc ID {}", m.id), score_percent(m.score)))
                .unzip()
        };

        let slots = data.len().max(BACKGROUND_COLORS.len());
        Self {
            labels,
            datasets: vec![Dataset {
                data,
                background_color: cycle_palette(&BACKGROUND_COLORS, slots),
                border_color: cycle_palette(&BORDER_COLORS, slots),
                border_width: 1,
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetric {
    pub label: String,
    pub value: String,
}

impl KeyMetric {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

pub fn key_metrics(content: &str, matches: &[SimilarDocument]) -> Vec<KeyMetric> {
    let top = matches
        .first()
        .map(|m| format!("ID {} ({:.2})", m.id, m.score))
        .unwrap_or_else(|| "N/A".to_string());

    vec![
        KeyMetric::new("Total Words", word_count(content).to_string()),
        KeyMetric::new("Similar Documents Found", matches.len().to_string()),
        KeyMetric::new("Top Similar Doc", top),
        KeyMetric::new("Text Quality", SIMULATED_QUALITY),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReport {
    pub keyword_distribution: KeywordDistribution,
    pub key_metrics: Vec<KeyMetric>,
}

impl ContentReport {
    pub fn build(content: &str, matches: &[SimilarDocument]) -> Self {
        Self {
            keyword_distribution: KeywordDistribution::from_matches(matches),
            key_metrics: key_metrics(content, matches),
        }
    }
}

/// Counts runs separated by Unicode whitespace or the ASCII information
/// separators U+001C..=U+001F.
pub fn word_count(content: &str) -> usize {
    content
        .split(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
        .filter(|w| !w.is_empty())
        .count()
}

fn score_percent(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

fn cycle_palette(palette: &[&str], len: usize) -> Vec<String> {
    palette.iter().cycle().take(len).map(|c| c.to_string()).collect()
}
