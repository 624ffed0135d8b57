//! Human-readable rendering of analysis results and process lists.

use smartflow_core::helpers::{format_currency, format_duration};
use smartflow_core::{AnalysisResult, ProcessRecord};

/// Render one analysis as a sectioned card.
pub fn render_analysis(analysis: &AnalysisResult) -> String {
    if analysis.is_fallback() {
        return "Analysis unavailable: the provider could not produce a usable answer. \
                The process was saved; try analyzing it again later."
            .to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Automation potential: {}/10\n",
        analysis.potential_score
    ));
    out.push_str(&format!(
        "Estimated savings:    {} and {} per month\n",
        format_duration(analysis.savings.monthly_hours),
        format_currency(analysis.savings.monthly_currency),
    ));

    if !analysis.recommendations.is_empty() {
        out.push_str("\nRecommended tools:\n");
        for rec in &analysis.recommendations {
            out.push_str(&format!(
                "  - {} ({} rollout, {} per month)\n    {}\n",
                rec.tool_name,
                rec.rollout_time,
                format_currency(rec.monthly_cost),
                rec.description,
            ));
        }
    }

    if !analysis.rollout_plan.is_empty() {
        out.push_str("\nRollout plan:\n");
        for (i, step) in analysis.rollout_plan.iter().enumerate() {
            out.push_str(&format!("  {}. {step}\n", i + 1));
        }
    }

    if !analysis.notes.is_empty() {
        out.push_str("\nNotes:\n");
        for note in &analysis.notes {
            out.push_str(&format!("  - {note}\n"));
        }
    }

    out
}

/// Render one stored record with its analysis, if present.
pub fn render_record(record: &ProcessRecord) -> String {
    let mut out = format!(
        "{} [{}]\n  id: {}\n  created: {}\n",
        record.title,
        record.status.as_str(),
        record.id,
        record.created_at.format("%Y-%m-%d %H:%M"),
    );
    match &record.ai_analysis {
        Some(analysis) => {
            out.push('\n');
            out.push_str(&render_analysis(analysis));
        }
        None => out.push_str("  not analyzed yet\n"),
    }
    out
}

/// One line per record, most recent first (the store already orders them).
pub fn render_list(records: &[ProcessRecord]) -> String {
    if records.is_empty() {
        return "No processes yet.".to_string();
    }
    records
        .iter()
        .map(|record| {
            format!(
                "{}  {:>2}/10  {:<8}  {}",
                record.created_at.format("%Y-%m-%d"),
                record.potential_score,
                record.status.as_str(),
                record.title,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
