//! Password-strength scoring shown beside the signup password field.

/// Scores a password 0–4: one point per satisfied predicate (length ≥ 8,
/// ASCII uppercase present, ASCII digit present, non-alphanumeric present).
/// The predicates are independent; evaluation order does not matter.
pub fn score(password: &str) -> u8 {
    let mut strength = 0;
    if password.chars().count() >= 8 {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        strength += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        strength += 1;
    }
    strength
}

/// Qualitative label for a score. Zero renders as nothing.
pub fn label(score: u8) -> &'static str {
    match score {
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        4 => "Strong",
        _ => "",
    }
}
