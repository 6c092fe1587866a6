/// Size formatting utilities - human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

/// Format a byte count into a human-readable string with two decimal places.
///
/// Uses binary units (divisor 1024) labelled with the common short forms
/// (KB, MB, ...) because that is what users expect in a folder browser.
/// Values of a petabyte and above stay in PB rather than scaling further.
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    const TB: f64 = GB * 1024.0;
    const PB: f64 = TB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{b:.2} B")
    } else if b < MB {
        format!("{:.2} KB", b / KB)
    } else if b < GB {
        format!("{:.2} MB", b / MB)
    } else if b < TB {
        format!("{:.2} GB", b / GB)
    } else if b < PB {
        format!("{:.2} TB", b / TB)
    } else {
        format!("{:.2} PB", b / PB)
    }
}
