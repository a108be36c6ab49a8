use walk_recorder_core::TrackingMode;

/// Commands sent from the console and signal handlers to the main application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Enable tracking in this mode, or disable it if the mode is active.
    Toggle(TrackingMode),
    /// Request application shutdown.
    Shutdown,
}

impl AppCommand {
    /// Parse one console line.
    ///
    /// `a`/`activity` and `t`/`transition` toggle a mode, `q`/`quit` shuts
    /// down. Anything else is `None`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "a" | "activity" => Some(AppCommand::Toggle(TrackingMode::Activity)),
            "t" | "transition" => Some(AppCommand::Toggle(TrackingMode::Transition)),
            "q" | "quit" => Some(AppCommand::Shutdown),
            _ => None,
        }
    }
}
