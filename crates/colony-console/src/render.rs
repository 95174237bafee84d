//! Allocation and jealousy rendering.

use std::fmt::Write;

use colony_core::{Allocation, ColonistId, Jealousy, ResourceId};
use owo_colors::OwoColorize;
use serde::Serialize;

/// One row of an allocation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentView {
    pub colonist: ColonistId,
    pub resource: Option<ResourceId>,
}

/// Machine-readable allocation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationReport {
    pub assignments: Vec<AssignmentView>,
    pub jealous_count: usize,
    pub jealous: Vec<Jealousy>,
}

impl AllocationReport {
    /// Collects the rows of `allocation` in registration order.
    pub fn new(allocation: &Allocation, jealous: &[Jealousy]) -> Self {
        let assignments = allocation
            .iter()
            .map(|(colonist, resource)| AssignmentView {
                colonist: colonist.clone(),
                resource: resource.cloned(),
            })
            .collect();
        Self {
            assignments,
            jealous_count: jealous.len(),
            jealous: jealous.to_vec(),
        }
    }
}

/// Renders `allocation` as a two-column table, one colonist per line.
pub fn render_allocation(allocation: &Allocation, color: bool) -> String {
    let width = allocation
        .colonists()
        .iter()
        .map(|c| c.as_str().len())
        .chain(std::iter::once("Colonist".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let header = format!("{:<width$}  Resource", "Colonist");
    if color {
        let _ = writeln!(out, "{}", header.bright_white().bold());
    } else {
        let _ = writeln!(out, "{header}");
    }

    for (colonist, resource) in allocation.iter() {
        let name = format!("{:<width$}", colonist.as_str());
        match (resource, color) {
            (Some(r), true) => {
                let _ = writeln!(out, "{}  {}", name.white(), r.as_str().bright_yellow());
            }
            (Some(r), false) => {
                let _ = writeln!(out, "{name}  {r}");
            }
            (None, true) => {
                let _ = writeln!(out, "{}  {}", name.white(), "-".bright_black());
            }
            (None, false) => {
                let _ = writeln!(out, "{name}  -");
            }
        }
    }
    out
}

/// Renders the jealousy summary as `Jealous colonists: count (A, B)`.
pub fn render_jealousy(jealous: &[Jealousy], color: bool) -> String {
    let count = jealous.len();
    let names = jealous
        .iter()
        .map(|j| j.colonist.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let summary = if count == 0 {
        count.to_string()
    } else {
        format!("{count} ({names})")
    };

    if !color {
        return format!("Jealous colonists: {summary}");
    }
    let summary = if count == 0 {
        summary.bright_green().bold().to_string()
    } else {
        summary.bright_red().bold().to_string()
    };
    format!("{} {}", "Jealous colonists:".bright_white(), summary)
}

/// Serializes the report as pretty-printed JSON.
pub fn render_json(
    allocation: &Allocation,
    jealous: &[Jealousy],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&AllocationReport::new(allocation, jealous))
}
