use indicatif::{ProgressBar, ProgressStyle};

/// A ticking spinner on stderr. Hidden when debug logs are enabled, since
/// those are written to stderr while it would be spinning.
pub fn create_spinner(message: String) -> ProgressBar {
    if tracing::enabled!(tracing::Level::DEBUG) {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/", "✓"])
        .template("{msg} {spinner}")
    {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
