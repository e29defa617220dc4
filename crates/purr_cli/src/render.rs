//! Terminal rendering for the status view.

use purr_core::{Mood, PetState};
use std::path::Path;

const BAR_SLOTS: usize = 10;
const PANEL_WIDTH: usize = 30;

/// Panel with the pet's mood art and caption, titled with its name.
pub fn mood_panel(state: &PetState) -> String {
    let mood = Mood::from_state(state);
    let title = format!("── {} ", state.name);
    let rule_len = PANEL_WIDTH.saturating_sub(title.chars().count());

    format!(
        "{}{}\n  {}\n  {}\n{}",
        title,
        "─".repeat(rule_len),
        mood.art(),
        mood.caption(&state.name),
        "─".repeat(PANEL_WIDTH),
    )
}

/// `#`-bars for both drives, one `#` per 10 points, with percentages.
pub fn stat_bars(state: &PetState) -> String {
    format!(
        "Hunger:    {} {:.1}%\nHappiness: {} {:.1}%",
        bar(state.hunger),
        state.hunger,
        bar(state.happiness),
        state.happiness,
    )
}

fn bar(value: f32) -> String {
    let filled = (value / 10.0).floor().clamp(0.0, BAR_SLOTS as f32) as usize;
    format!("{:<width$}", "#".repeat(filled), width = BAR_SLOTS)
}

/// One-liner flavored by where in the filesystem the user is working.
pub fn context_message(name: &str, cwd: &Path) -> String {
    let cwd_str = cwd.to_string_lossy();
    if cwd_str.contains("Documents") {
        format!("{} is watching you work... it looks bored.", name)
    } else if cwd_str.contains("Downloads") {
        format!("{} is playing with a stray .zip file.", name)
    } else {
        let basename = cwd
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "root".to_string());
        format!("{} is lounging in {}.", name, basename)
    }
}
