#![allow(dead_code)]

//! Skill partitioning — the three named skill groupings of the results view.

use crate::models::AnalysisResult;

/// Shown in place of an empty skill list. Display rule only: an empty
/// sequence in the payload is valid data, not an error.
pub const NO_SKILLS_PLACEHOLDER: &str = "No skills detected";

/// Badge styling variant per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillVariant {
    Default,
    Success,
    Destructive,
}

/// One of the three skill groupings, in backend order, rendered
/// independently empty-or-populated.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillSection {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: SkillVariant,
    pub skills: Vec<String>,
}

impl SkillSection {
    /// Badge labels, or the placeholder when the section is empty.
    pub fn display_items(&self) -> Vec<&str> {
        if self.skills.is_empty() {
            vec![NO_SKILLS_PLACEHOLDER]
        } else {
            self.skills.iter().map(String::as_str).collect()
        }
    }
}

/// Partitions a result into the three display sections.
pub fn skill_sections(result: &AnalysisResult) -> [SkillSection; 3] {
    [
        SkillSection {
            title: "Your Skills",
            description: "Skills extracted from your resume",
            variant: SkillVariant::Default,
            skills: result.resume_skills.clone(),
        },
        SkillSection {
            title: "Matching Skills",
            description: "Skills that match the job requirements",
            variant: SkillVariant::Success,
            skills: result.common_skills.clone(),
        },
        SkillSection {
            title: "Skills Gap",
            description: "Skills to consider adding",
            variant: SkillVariant::Destructive,
            skills: result.missing_skills.clone(),
        },
    ]
}
