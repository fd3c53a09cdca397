//! Display formatting helpers shared by the widgets.

/// Formats an age in seconds as a compact unit string.
pub fn format_age(secs: i64) -> String {
    if secs < 0 {
        return "-".to_string();
    }
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86400)
    }
}

/// Renders a 0..=100 progress value as a fixed-width bar.
pub fn progress_bar(pct: u8, width: usize) -> String {
    let pct = pct.min(100) as usize;
    let filled = (pct * width).div_ceil(100).min(width);
    let mut bar = String::with_capacity(width);
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

/// Formats a trend percentage with its direction arrow.
pub fn format_trend(pct: f64, positive: bool) -> String {
    let arrow = if positive { '▲' } else { '▼' };
    format!("{}{:.1}%", arrow, pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_units() {
        assert_eq!(format_age(0), "0s");
        assert_eq!(format_age(59), "59s");
        assert_eq!(format_age(60), "1m");
        assert_eq!(format_age(3 * 3600), "3h");
        assert_eq!(format_age(2 * 86400), "2d");
        assert_eq!(format_age(-5), "-");
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0, 10), "░░░░░░░░░░");
        assert_eq!(progress_bar(100, 10), "██████████");
        assert_eq!(progress_bar(50, 10).chars().filter(|&c| c == '█').count(), 5);
        // Values above 100 clamp
        assert_eq!(progress_bar(250, 4), "████");
        // Small but non-zero progress still shows one cell
        assert_eq!(progress_bar(1, 10).chars().filter(|&c| c == '█').count(), 1);
    }

    #[test]
    fn trend_arrows() {
        assert_eq!(format_trend(5.2, true), "▲5.2%");
        assert_eq!(format_trend(0.8, false), "▼0.8%");
    }
}
