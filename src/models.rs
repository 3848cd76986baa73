//! Core data models for the pet NLP service

use serde::{Deserialize, Serialize};
use std::fmt;

//
// ================= Enums =================
//

/// Which stage produced the final intent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResolutionMethod {
    Keyword,
    Model,
}

/// Animation the pet plays in response to an intent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PetAction {
    Play,
    Eat,
    Sleep,
    Happy,
    Idle,
}

impl PetAction {
    pub fn from_intent(intent: &str) -> Self {
        match intent {
            "PLAY" => PetAction::Play,
            "FEED" => PetAction::Eat,
            "SLEEP" => PetAction::Sleep,
            "PET" | "COMFORT" => PetAction::Happy,
            _ => PetAction::Idle,
        }
    }
}

//
// ================= Resolution =================
//

/// Outcome of hybrid intent resolution for one text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionResult {
    pub intent: String,
    pub method: ResolutionMethod,
    /// Present only when `method` is `Keyword`
    pub matched_keyword: Option<String>,
    pub trace: Vec<String>,
}

impl ResolutionResult {
    pub fn keyword(intent: &str, keyword: &str) -> Self {
        Self {
            intent: intent.to_string(),
            method: ResolutionMethod::Keyword,
            matched_keyword: Some(keyword.to_string()),
            trace: vec![format!("KEYWORD:{}({})", intent, keyword)],
        }
    }

    pub fn model(intent: String) -> Self {
        let trace = vec![format!("MODEL:{}", intent)];
        Self {
            intent,
            method: ResolutionMethod::Model,
            matched_keyword: None,
            trace,
        }
    }
}

//
// ================= Analysis =================
//

/// Sentiment and intent for one text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextAnalysis {
    pub text: String,
    pub sentiment: String,
    pub resolution: ResolutionResult,
}

impl TextAnalysis {
    pub fn action(&self) -> PetAction {
        PetAction::from_intent(&self.resolution.intent)
    }
}

/// Flat response body returned by the analyze endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeResponse {
    pub text: String,
    pub sentiment: String,
    pub intent: String,
    pub method: ResolutionMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub action: PetAction,
    pub trace: Vec<String>,
}

impl From<TextAnalysis> for AnalyzeResponse {
    fn from(analysis: TextAnalysis) -> Self {
        let action = analysis.action();
        let TextAnalysis {
            text,
            sentiment,
            resolution,
        } = analysis;

        Self {
            text,
            sentiment,
            intent: resolution.intent,
            method: resolution.method,
            keyword: resolution.matched_keyword,
            action,
            trace: resolution.trace,
        }
    }
}

impl fmt::Display for ResolutionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResolutionMethod::Keyword => "KEYWORD",
            ResolutionMethod::Model => "MODEL",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for PetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PetAction::Play => "play",
            PetAction::Eat => "eat",
            PetAction::Sleep => "sleep",
            PetAction::Happy => "happy",
            PetAction::Idle => "idle",
        };
        write!(f, "{}", s)
    }
}
