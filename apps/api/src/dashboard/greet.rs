//! Time-of-day greeting for the dashboard welcome banner.

/// Greets `name` for the given hour (0–23). Blank names fall back to
/// "Guest". Pure in `hour`; callers supply the current local hour.
pub fn greet(name: &str, hour: u32) -> String {
    let name = if name.is_empty() { "Guest" } else { name };

    if hour < 12 {
        format!("Good morning, {name}!")
    } else if hour < 18 {
        format!("Good afternoon, {name}!")
    } else {
        format!("Good evening, {name}!")
    }
}
