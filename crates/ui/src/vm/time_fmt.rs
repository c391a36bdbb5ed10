#[must_use]
pub fn format_seconds_left(seconds: u32) -> String {
    format!("{seconds}s")
}
