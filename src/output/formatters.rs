//! Formatting utilities for terminal output

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

/// Bar showing a rank relative to the highest rank in the same listing
#[must_use]
pub fn rank_bar(rank: u32, top_rank: u32, width: usize) -> String {
    create_progress_bar(f64::from(rank), f64::from(top_rank), width)
}

/// Human-readable rank, with the unknown sentinel spelled out
#[must_use]
pub fn format_rank(rank: i64) -> String {
    if rank < 0 {
        "unknown".to_string()
    } else {
        rank.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UNKNOWN_RANK;

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
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn rank_bar_scales_to_top() {
        assert_eq!(rank_bar(4, 4, 8), "████████");
        assert_eq!(rank_bar(2, 4, 8), "████░░░░");
        assert_eq!(rank_bar(0, 0, 3), "░░░");
    }

    #[test]
    fn format_rank_values() {
        assert_eq!(format_rank(0), "0");
        assert_eq!(format_rank(17), "17");
        assert_eq!(format_rank(UNKNOWN_RANK), "unknown");
    }
}
