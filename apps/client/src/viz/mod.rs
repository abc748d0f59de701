//! Visualization engine — pure, synchronous mapping from the result payload
//! to renderable values. No network, no state: everything here is computed
//! fresh from an `AnalysisResult` snapshot on every render.

pub mod confidence;
pub mod report;
pub mod ring;
pub mod skills;

pub use confidence::{classify_confidence, ColorClass, ConfidenceDetails, ConfidenceTier};
pub use report::{build_view, AnalysisView, ScoreCard};
pub use ring::{ring_geometry, RingGeometry};
pub use skills::{skill_sections, SkillSection, SkillVariant, NO_SKILLS_PLACEHOLDER};
