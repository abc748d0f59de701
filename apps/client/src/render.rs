//! Plain-text rendering of an `AnalysisView` for the terminal driver.
//!
//! Presentational glue only: all classification and geometry already
//! happened in the viz layer, this just lays the values out as text.

use crate::viz::{AnalysisView, ScoreCard};

const METER_BARS: u8 = 3;

fn render_score_card(card: &ScoreCard) -> String {
    // 20-slot bar standing in for the progress ring.
    let filled = ((card.value as usize * 20) / 100).min(20);
    format!(
        "  {:<16} {:>3}%  [{}{}] ({})",
        card.title,
        card.value,
        "#".repeat(filled),
        "-".repeat(20 - filled),
        card.color.as_str()
    )
}

/// Renders the full results view as terminal text.
pub fn render_view(view: &AnalysisView) -> String {
    let mut out = String::new();

    let meter: String = (1..=METER_BARS)
        .map(|i| if i <= view.confidence.level { '|' } else { '.' })
        .collect();
    out.push_str(&format!(
        "Resume Strength: {} [{meter}] ({})\n\n",
        view.confidence.label,
        view.confidence.color.as_str()
    ));

    out.push_str("Scores\n");
    for card in &view.score_cards {
        out.push_str(&render_score_card(card));
        out.push('\n');
    }

    out.push_str("\nSkills Analysis\n");
    for section in &view.skill_sections {
        out.push_str(&format!("  {} — {}\n", section.title, section.description));
        for item in section.display_items() {
            out.push_str(&format!("    - {item}\n"));
        }
    }

    for list in [&view.ats_recommendations, &view.rewrite_suggestions] {
        out.push_str(&format!("\n{}\n", list.title));
        if list.items.is_empty() {
            out.push_str("    (none)\n");
        } else {
            for item in &list.items {
                out.push_str(&format!("    - {item}\n"));
            }
        }
    }

    out
}
