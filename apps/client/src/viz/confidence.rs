#![allow(dead_code)]

//! Confidence tiering — maps the backend's free-form `confidence` label to a
//! discrete visual tier.
//!
//! The backend vocabulary is not a contract (currently "Strong" / "Medium" /
//! "Weak"), so classification is substring-based and total: any non-empty
//! string that matches no keyword lands in `Low`. That fallback is the
//! documented behavior — absence of a recognized keyword is treated as a
//! weak signal, not an error.

/// Discrete classification bucket derived from the confidence text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// No confidence text yet (absent or empty).
    Pending,
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// Meter level: how many of the three bars light up.
    pub fn level(&self) -> u8 {
        match self {
            ConfidenceTier::Pending => 0,
            ConfidenceTier::Low => 1,
            ConfidenceTier::Medium => 2,
            ConfidenceTier::High => 3,
        }
    }
}

/// Color classes shared by the confidence meter and the score rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    Primary,
    Success,
    Warning,
    Info,
    Destructive,
    Muted,
}

impl ColorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorClass::Primary => "primary",
            ColorClass::Success => "success",
            ColorClass::Warning => "warning",
            ColorClass::Info => "info",
            ColorClass::Destructive => "destructive",
            ColorClass::Muted => "muted",
        }
    }
}

/// Fully derived display attributes for the confidence meter. Never cached:
/// the source text can change with every result.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceDetails {
    pub tier: ConfidenceTier,
    pub level: u8,
    pub color: ColorClass,
    /// The original backend text, or "Pending" when absent.
    pub label: String,
}

/// Classifies a confidence label, case-insensitively, in priority order:
/// high/strong, then medium/moderate, then the `Low` fallback. The order
/// matters — "MEDIUM-HIGH" is `High` because the first rule wins.
pub fn classify_confidence(confidence: Option<&str>) -> ConfidenceDetails {
    // Only truly absent/empty text is Pending. Anything else, whitespace
    // included, is a present-but-unrecognized signal and takes the normal
    // classification path.
    let text = confidence.unwrap_or("");
    if text.is_empty() {
        return ConfidenceDetails {
            tier: ConfidenceTier::Pending,
            level: 0,
            color: ColorClass::Muted,
            label: "Pending".to_string(),
        };
    }

    let lower = text.to_lowercase();
    let (tier, color) = if lower.contains("high") || lower.contains("strong") {
        (ConfidenceTier::High, ColorClass::Success)
    } else if lower.contains("medium") || lower.contains("moderate") {
        (ConfidenceTier::Medium, ColorClass::Warning)
    } else {
        (ConfidenceTier::Low, ColorClass::Destructive)
    };

    ConfidenceDetails {
        tier,
        level: tier.level(),
        color,
        label: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_and_strong_keywords_classify_high() {
        for text in ["High", "STRONG", "Very High Confidence", "strong match"] {
            let details = classify_confidence(Some(text));
            assert_eq!(details.tier, ConfidenceTier::High, "{text}");
            assert_eq!(details.level, 3);
            assert_eq!(details.color, ColorClass::Success);
            assert_eq!(details.label, text);
        }
    }

    #[test]
    fn test_medium_and_moderate_keywords_classify_medium() {
        for text in ["Medium", "Moderate", "moderate fit"] {
            let details = classify_confidence(Some(text));
            assert_eq!(details.tier, ConfidenceTier::Medium, "{text}");
            assert_eq!(details.level, 2);
            assert_eq!(details.color, ColorClass::Warning);
        }
    }

    #[test]
    fn test_high_rule_wins_over_medium_in_mixed_labels() {
        // Contains both "medium" and "high"; the high/strong check runs first.
        let details = classify_confidence(Some("MEDIUM-HIGH"));
        assert_eq!(details.tier, ConfidenceTier::High);
        assert_eq!(details.level, 3);
    }

    #[test]
    fn test_absent_or_empty_is_pending() {
        for input in [None, Some("")] {
            let details = classify_confidence(input);
            assert_eq!(details.tier, ConfidenceTier::Pending);
            assert_eq!(details.level, 0);
            assert_eq!(details.color, ColorClass::Muted);
            assert_eq!(details.label, "Pending");
        }
    }

    #[test]
    fn test_whitespace_only_text_is_low_not_pending() {
        // Non-empty input, even all-whitespace, matches no keyword and
        // takes the Low fallback; the label stays verbatim.
        let details = classify_confidence(Some("   "));
        assert_eq!(details.tier, ConfidenceTier::Low);
        assert_eq!(details.level, 1);
        assert_eq!(details.color, ColorClass::Destructive);
        assert_eq!(details.label, "   ");
    }

    #[test]
    fn test_unrecognized_text_falls_back_to_low() {
        for text in ["Low", "Weak", "Unclear", "excellent"] {
            let details = classify_confidence(Some(text));
            assert_eq!(details.tier, ConfidenceTier::Low, "{text}");
            assert_eq!(details.level, 1);
            assert_eq!(details.color, ColorClass::Destructive);
            assert_eq!(details.label, text);
        }
    }
}
