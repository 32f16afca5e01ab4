use std::io::{self, Write};

use crate::events::Event;

static SUCCESS_MESSAGE: &str = "Events fetched successfully.";

fn header() -> String {
    format!(
        "{:<20} {:<20} {:<30} {:<30} {:<10} {:<30}",
        "Event ID", "Event Type", "Actor", "Repo", "Public", "Created At"
    )
}

// Widths are minimums; longer values push the rest of the line right.
fn row(event: &Event) -> String {
    format!(
        "{:<20} {:<20} {:<30} {:<30} {:<10} {:<30}",
        event.id,
        event.r#type,
        event.actor.login,
        event.repo.name,
        event.public,
        event.created_at
    )
}

/// Prints the header, one row per event and the two summary lines.
pub fn render_table<W: Write>(events: &[Event], out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", header())?;
    for event in events {
        writeln!(out, "{}", row(event))?;
    }
    writeln!(out, "{}", SUCCESS_MESSAGE)?;
    writeln!(out, "Total events: {}", events.len())?;

    Ok(())
}
