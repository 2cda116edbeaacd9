use crate::diff::{ChangeRecord, ChangeReport, Delta};
use std::fmt::Display;

/// Formats change reports into human-readable alert text.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Renders a report as alert text: a headline with the version
    /// transition, then one block per changed facet with one line per delta.
    ///
    /// Facets with no changes are omitted entirely.
    pub fn format_report(report: &ChangeReport) -> String {
        let mut lines = vec![format!(
            "Recipe '{}' updated ({} -> {})",
            report.name, report.old_version, report.new_version
        )];

        Self::push_facet(&mut lines, "Material changes:", &report.materials);
        Self::push_facet(&mut lines, "Stat changes:", &report.output_stats);
        Self::push_facet(
            &mut lines,
            "Requirement changes:",
            &report.profession_requirements,
        );

        lines.join("\n")
    }

    fn push_facet<V: Display>(lines: &mut Vec<String>, header: &str, record: &ChangeRecord<V>) {
        if record.is_empty() {
            return;
        }
        lines.push(header.to_string());
        for delta in record.iter() {
            lines.push(Self::format_delta(delta));
        }
    }

    fn format_delta<V: Display>(delta: &Delta<V>) -> String {
        match delta {
            Delta::Added { key, new } => format!("- {}: added ({})", key, new),
            Delta::Removed { key, old } => format!("- {}: removed (was {})", key, old),
            Delta::Modified { key, old, new } => {
                format!("- {}: modified ({} -> {})", key, old, new)
            }
        }
    }
}
