/// Block ramp from empty to full in eighths.
const RAMP: [char; 9] = ['░', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
const EMPTY: char = RAMP[0];
const FULL: char = RAMP[8];

/// Renders `percent` as a bar exactly `size` characters wide with 1/8
/// cell resolution.
pub fn render(percent: f64, size: usize) -> String {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    let eighths = (size as f64 * 8.0 * percent / 100.0).floor() as usize;
    let full_cells = eighths / 8;

    if full_cells >= size {
        return FULL.to_string().repeat(size);
    }

    let mut bar = String::with_capacity(size * FULL.len_utf8());
    bar.extend(std::iter::repeat_n(FULL, full_cells));
    bar.push(RAMP[eighths % 8]);
    bar.extend(std::iter::repeat_n(EMPTY, size - full_cells - 1));
    bar
}
