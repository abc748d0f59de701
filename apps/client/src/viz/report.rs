#![allow(dead_code)]

//! Assembles the full renderable view of one analysis result.

use crate::models::AnalysisResult;
use crate::viz::confidence::{classify_confidence, ColorClass, ConfidenceDetails};
use crate::viz::ring::{ring_geometry, RingGeometry, SCORE_CARD_SIZE, SCORE_CARD_STROKE_WIDTH};
use crate::viz::skills::{skill_sections, SkillSection};

/// One score card: a labeled percentage with its ring geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub title: &'static str,
    pub value: u32,
    pub color: ColorClass,
    pub ring: RingGeometry,
}

/// A named list of advice strings.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationList {
    pub title: &'static str,
    pub items: Vec<String>,
}

/// Everything the rendering layer needs, derived in one pass from the
/// result payload. Values are passed through unclamped: the payload
/// contract already bounds percentages to [0,100].
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub confidence: ConfidenceDetails,
    pub score_cards: [ScoreCard; 3],
    pub skill_sections: [SkillSection; 3],
    pub ats_recommendations: RecommendationList,
    pub rewrite_suggestions: RecommendationList,
}

fn score_card(title: &'static str, value: u32, color: ColorClass) -> ScoreCard {
    ScoreCard {
        title,
        value,
        color,
        ring: ring_geometry(value, SCORE_CARD_SIZE, SCORE_CARD_STROKE_WIDTH),
    }
}

/// Builds the view model for one result. Pure and synchronous; recomputed
/// from scratch on every render, never cached.
pub fn build_view(result: &AnalysisResult) -> AnalysisView {
    AnalysisView {
        confidence: classify_confidence(result.confidence.as_deref()),
        score_cards: [
            score_card(
                "Skill Match",
                result.skill_match_percentage,
                ColorClass::Primary,
            ),
            score_card(
                "Semantic Match",
                result.semantic_match_percentage,
                ColorClass::Info,
            ),
            score_card(
                "Overall Score",
                result.final_match_percentage,
                ColorClass::Success,
            ),
        ],
        skill_sections: skill_sections(result),
        ats_recommendations: RecommendationList {
            title: "ATS Optimization Tips",
            items: result.ats_recommendations.clone(),
        },
        rewrite_suggestions: RecommendationList {
            title: "Resume Improvements",
            items: result.rewrite_suggestions.clone(),
        },
    }
}
