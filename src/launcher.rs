//! Browser launcher
//!
//! The embed player is a web page, so "playing" a movie means handing its
//! URL to the system's default browser.

use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

/// Platform opener used to hand URLs to the default browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opener {
    /// `xdg-open` (Linux, BSD)
    XdgOpen,
    /// `open` (macOS)
    Open,
    /// `cmd /C start` (Windows)
    Start,
}

impl Opener {
    /// Opener for the current platform
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Opener::Open
        } else if cfg!(target_os = "windows") {
            Opener::Start
        } else {
            Opener::XdgOpen
        }
    }

    /// Program to execute
    pub fn program(&self) -> &'static str {
        match self {
            Opener::XdgOpen => "xdg-open",
            Opener::Open => "open",
            Opener::Start => "cmd",
        }
    }

    /// Arguments that precede the URL
    fn leading_args(&self) -> &'static [&'static str] {
        match self {
            Opener::Start => &["/C", "start", ""],
            Opener::XdgOpen | Opener::Open => &[],
        }
    }
}

impl std::fmt::Display for Opener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// Errors from launching the browser
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("'{0}' not found. Open the URL manually.")]
    NotFound(String),
    #[error("Failed to start browser: {0}")]
    StartFailed(#[from] std::io::Error),
    #[error("Browser exited with status {0}")]
    ExitStatus(i32),
    #[error("Refusing to open non-http URL: {0}")]
    InvalidUrl(String),
}

/// Opens embed URLs in the system browser
#[derive(Debug, Clone)]
pub struct BrowserLauncher {
    opener: Opener,
}

impl Default for BrowserLauncher {
    fn default() -> Self {
        Self::new(Opener::detect())
    }
}

impl BrowserLauncher {
    pub fn new(opener: Opener) -> Self {
        Self { opener }
    }

    pub fn opener(&self) -> Opener {
        self.opener
    }

    /// Build the command without running it
    pub fn command(&self, url: &str) -> Result<Command, LaunchError> {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(LaunchError::InvalidUrl(url.to_string()));
        }

        let mut cmd = Command::new(self.opener.program());
        cmd.args(self.opener.leading_args());
        cmd.arg(url);

        // Browser output would corrupt the TUI
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());
        Ok(cmd)
    }

    /// Open a URL and wait for the opener to hand it off
    pub async fn open(&self, url: &str) -> Result<(), LaunchError> {
        let mut cmd = self.command(url)?;
        tracing::info!(opener = %self.opener, url, "launcher: opening browser");

        let status = cmd.status().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LaunchError::NotFound(self.opener.program().to_string())
            } else {
                LaunchError::StartFailed(e)
            }
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::ExitStatus(status.code().unwrap_or(-1)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_programs() {
        assert_eq!(Opener::XdgOpen.program(), "xdg-open");
        assert_eq!(Opener::Open.program(), "open");
        assert_eq!(Opener::Start.to_string(), "cmd");
    }

    #[test]
    fn test_command_args() {
        let launcher = BrowserLauncher::new(Opener::Start);
        let cmd = launcher.command("https://vidsrc.icu/embed/movie/550").unwrap();
        let std_cmd = cmd.as_std();
        let args: Vec<_> = std_cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(std_cmd.get_program(), "cmd");
        assert_eq!(args, vec!["/C", "start", "", "https://vidsrc.icu/embed/movie/550"]);
    }

    #[test]
    fn test_rejects_non_http_urls() {
        let launcher = BrowserLauncher::new(Opener::XdgOpen);
        assert!(matches!(
            launcher.command("file:///etc/passwd"),
            Err(LaunchError::InvalidUrl(_))
        ));
    }
}
