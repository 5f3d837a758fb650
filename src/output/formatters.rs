//! Formatting utilities for terminal output

/// Gallows drawings, from empty to complete
const GALLOWS: [[&str; 6]; 7] = [
    [
        "  +---+", "  |   |", "      |", "      |", "      |", "=======",
    ],
    [
        "  +---+", "  |   |", "  O   |", "      |", "      |", "=======",
    ],
    [
        "  +---+", "  |   |", "  O   |", "  |   |", "      |", "=======",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|   |", "      |", "=======",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "=======",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "=======",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "=======",
    ],
];

/// Number of drawing stages after the empty gallows
pub const GALLOWS_STAGES: u32 = 6;

/// Pick the drawing stage for a mistake count
///
/// Budgets other than six are scaled so the figure completes exactly on the
/// last allowed mistake.
#[must_use]
pub fn gallows_stage(mistakes: u32, max_attempts: u32) -> usize {
    if max_attempts == 0 {
        return GALLOWS_STAGES as usize;
    }
    let mistakes = u64::from(mistakes.min(max_attempts));
    let stage = (mistakes * u64::from(GALLOWS_STAGES)).div_ceil(u64::from(max_attempts));
    stage as usize
}

/// Lines of the gallows drawing for a mistake count
#[must_use]
pub fn gallows(mistakes: u32, max_attempts: u32) -> &'static [&'static str] {
    &GALLOWS[gallows_stage(mistakes, max_attempts)]
}

/// Put a space between each character of the masked word
///
/// Word gaps become three spaces so they stay visible.
#[must_use]
pub fn spaced(masked: &str) -> String {
    masked
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join letters with single spaces
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining attempts as a bar
#[must_use]
pub fn attempts_bar(remaining: u32, max_attempts: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(max_attempts), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallows_stage_default_budget() {
        assert_eq!(gallows_stage(0, 6), 0);
        assert_eq!(gallows_stage(3, 6), 3);
        assert_eq!(gallows_stage(6, 6), 6);
    }

    #[test]
    fn gallows_stage_scaled_budget() {
        assert_eq!(gallows_stage(1, 3), 2);
        assert_eq!(gallows_stage(3, 3), 6);
        assert_eq!(gallows_stage(1, 10), 1);
        assert_eq!(gallows_stage(10, 10), 6);
        assert_eq!(gallows_stage(12, 10), 6);
    }

    #[test]
    fn gallows_stage_huge_budget() {
        assert_eq!(gallows_stage(1, u32::MAX), 1);
        assert_eq!(gallows_stage(1_000_000_000, 1_000_000_000), 6);
        assert_eq!(gallows_stage(u32::MAX / 2, u32::MAX), 3);
        assert_eq!(gallows(u32::MAX, u32::MAX), gallows(6, 6));
    }

    #[test]
    fn gallows_complete_figure() {
        let lines = gallows(6, 6);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4], " / \\  |");
    }

    #[test]
    fn spaced_word() {
        assert_eq!(spaced("M___E"), "M _ _ _ E");
        assert_eq!(spaced("AB CD"), "A B   C D");
    }

    #[test]
    fn letter_list_joins() {
        assert_eq!(letter_list(&['Z', 'X']), "Z X");
        assert_eq!(letter_list(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn attempts_bar_half() {
        assert_eq!(attempts_bar(3, 6, 6), "███░░░");
    }
}
