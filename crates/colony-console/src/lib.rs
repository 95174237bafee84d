//! Colorful console output for the colony allocator.
//!
//! Provides a custom `tracing` layer that formats `colony_core` events with
//! colors, plus renderers for allocations and jealousy reports.
//!
//! ## Log Levels
//!
//! - **INFO**: Document parsed, allocation computed, swap applied
//! - **DEBUG**: Section transitions and individual assignments
//! - **TRACE**: Individual jealousy checks

mod render;

pub use render::{
    render_allocation, render_jealousy, render_json, AllocationReport, AssignmentView,
};

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console logging with `default_filter` as the fallback
/// directive when `RUST_LOG` is not set.
///
/// Safe to call multiple times - only the first call has effect. An
/// unparsable directive falls back to `colony_core=info`.
pub fn init(default_filter: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("colony_core=info"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ColonyConsoleLayer)
            .try_init();
    });
}

/// Prints the banner shown when an interactive session starts.
pub fn print_banner(color: bool) {
    let banner = format!("Colony allocator v{VERSION}");
    let rule = "=".repeat(banner.len());

    let mut stdout = io::stdout().lock();
    if color {
        let _ = writeln!(stdout, "{}", rule.bright_cyan());
        let _ = writeln!(stdout, "{}", banner.bright_white().bold());
        let _ = writeln!(stdout, "{}", rule.bright_cyan());
    } else {
        let _ = writeln!(stdout, "{rule}\n{banner}\n{rule}");
    }
    let _ = stdout.flush();
}

/// A tracing layer that formats colony events with colors.
pub struct ColonyConsoleLayer;

impl<S: Subscriber> Layer<S> for ColonyConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("colony_core") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    colonist: Option<String>,
    resource: Option<String>,
    rival: Option<String>,
    left: Option<String>,
    right: Option<String>,
    left_resource: Option<String>,
    right_resource: Option<String>,
    from: Option<String>,
    to: Option<String>,
    colonists: Option<u64>,
    resources: Option<u64>,
    conflicts: Option<u64>,
    lines: Option<u64>,
    line: Option<u64>,
    rank: Option<u64>,
    own_rank: Option<u64>,
    rival_rank: Option<u64>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        let slot = match name {
            "event" => &mut self.event,
            "colonist" => &mut self.colonist,
            "resource" => &mut self.resource,
            "rival" => &mut self.rival,
            "left" => &mut self.left,
            "right" => &mut self.right,
            "left_resource" => &mut self.left_resource,
            "right_resource" => &mut self.right_resource,
            "from" => &mut self.from,
            "to" => &mut self.to,
            _ => return,
        };
        *slot = Some(value);
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "colonists" => self.colonists = Some(value),
            "resources" => self.resources = Some(value),
            "conflicts" => self.conflicts = Some(value),
            "lines" => self.lines = Some(value),
            "line" => self.line = Some(value),
            "rank" => self.rank = Some(value),
            "own_rank" => self.own_rank = Some(value),
            "rival_rank" => self.rival_rank = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "document_parsed" => format_document_parsed(v),
        "allocation_computed" => format_allocation_computed(v),
        "swap" => format_swap(v),
        "section_change" => format_section_change(v),
        "assign" => format_assign(v),
        "envy_check" if level == Level::TRACE => format_envy_check(v),
        _ => String::new(),
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("?")
}

fn format_document_parsed(v: &EventVisitor) -> String {
    format!(
        "{} Parsed │ {} colonists │ {} resources │ {} conflicts │ {} lines",
        "▶".bright_green().bold(),
        v.colonists.unwrap_or(0).bright_yellow(),
        v.resources.unwrap_or(0).bright_yellow(),
        v.conflicts.unwrap_or(0).bright_yellow(),
        v.lines.unwrap_or(0).white(),
    )
}

fn format_allocation_computed(v: &EventVisitor) -> String {
    format!(
        "{} Allocation computed │ {} colonists served",
        "■".bright_cyan().bold(),
        v.colonists.unwrap_or(0).bright_yellow(),
    )
}

fn format_swap(v: &EventVisitor) -> String {
    format!(
        "{} Swap │ {} ← {} │ {} ← {}",
        "⇄".bright_magenta().bold(),
        text(&v.left).white().bold(),
        text(&v.left_resource).bright_yellow(),
        text(&v.right).white().bold(),
        text(&v.right_resource).bright_yellow(),
    )
}

fn format_section_change(v: &EventVisitor) -> String {
    format!(
        "{} line {:>4} │ {} → {}",
        "·".bright_black(),
        v.line.unwrap_or(0).bright_black(),
        text(&v.from).bright_black(),
        text(&v.to).bright_blue(),
    )
}

fn format_assign(v: &EventVisitor) -> String {
    let rank = v.rank.unwrap_or(0);
    let choice = format!("choice #{}", rank + 1);
    let choice = if rank == 0 {
        choice.bright_green().to_string()
    } else {
        choice.yellow().to_string()
    };
    format!(
        "{} {} → {} │ {}",
        "·".bright_black(),
        text(&v.colonist).white(),
        text(&v.resource).bright_yellow(),
        choice,
    )
}

fn format_envy_check(v: &EventVisitor) -> String {
    let own = v.own_rank.unwrap_or(0);
    let theirs = v.rival_rank.unwrap_or(u64::MAX);
    let icon = if theirs < own {
        "✗".bright_red().to_string()
    } else {
        "✓".bright_green().to_string()
    };
    format!(
        "{} {} vs {}",
        icon,
        text(&v.colonist).bright_black(),
        text(&v.rival).bright_black(),
    )
}
