use clap;

/// CLI-selectable logging verbosity, mapped onto a [`tracing::Level`] by the
/// driver when it installs the subscriber. `Silent` has no true "off" level
/// in `tracing`, so it maps to `Error`: only fatal diagnostics are shown.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
