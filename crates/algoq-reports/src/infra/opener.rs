//! Hands external links to the desktop's default handler.

use std::io;

use tokio::process::Command;
use tracing::{debug, warn};

/// Boundary for opening a URL outside the terminal.
///
/// Production uses [`SystemOpener`], while tests can inject
/// `MockExternalOpener` to avoid launching a browser.
#[cfg_attr(test, mockall::automock)]
pub trait ExternalOpener: Send + Sync {
    /// Starts opening `url` without waiting for the handler to finish.
    ///
    /// # Errors
    /// Returns an error when the platform opener cannot be started.
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the platform opener (`open`, the `url.dll` protocol
/// handler or `xdg-open`).
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        let mut child = opener_command(url).spawn()?;
        let url = url.to_string();

        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => debug!(%url, "opened external link"),
                Ok(status) => warn!(%url, %status, "external opener exited with failure"),
                Err(error) => warn!(%url, %error, "failed to wait for external opener"),
            }
        });

        Ok(())
    }
}

fn opener_command(url: &str) -> Command {
    let (program, leading_args) = opener_program(std::env::consts::OS);
    let mut command = Command::new(program);
    command
        .args(leading_args)
        .arg(url)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null());

    command
}

/// Returns the opener program for `os` and the arguments that precede the
/// URL.
fn opener_program(os: &str) -> (&'static str, &'static [&'static str]) {
    match os {
        "macos" => ("open", &[]),
        // The URL reaches the handler verbatim; `cmd` would split it at `&`.
        "windows" => ("rundll32", &["url.dll,FileProtocolHandler"]),
        _ => ("xdg-open", &[]),
    }
}
