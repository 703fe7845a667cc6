/// Renders a signed minute offset for table rows and CSV cells.
pub fn format_diff(diff: i64) -> String {
    if diff < 0 {
        format!("{} min earlier", diff.unsigned_abs())
    } else if diff >= 60 {
        format!("{}h {}m later", diff / 60, diff % 60)
    } else {
        format!("{diff} min later")
    }
}
