//! Text progress bars embedded in table cells.

const FILLED: char = '█';
const EMPTY: char = '░';

/// A bar of `width` cells filled to `ratio` (clamped to 0..=1).
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let filled = (ratio * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar
}

/// Percentage on the left, bar filling the rest of `width`.
///
/// The percentage is zero padded to five characters (`05.23% `). When `width`
/// is narrower than the label only the label is shown.
pub fn percent_bar(percent: f64, width: usize) -> String {
    let label = format!("{:05.2}% ", percent);
    let bar_width = width.saturating_sub(label.chars().count());
    format!("{label}{}", progress_bar(percent / 100.0, bar_width))
}
