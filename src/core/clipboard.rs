use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

/// Destination for copied symbol representations. Fire-and-forget: callers
/// get no confirmation beyond the write having completed.
pub trait Clipboard {
    fn write(&self, text: &str) -> Result<()>;
}

/// Candidate system clipboard tools, in probe order.
const CLIPBOARD_TOOLS: [(&str, &[&str]); 4] = [
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Clipboard backed by whatever copy tool the platform provides.
pub struct SystemClipboard {
    tool: PathBuf,
    args: Vec<&'static str>,
}

impl SystemClipboard {
    /// Locates a clipboard tool on PATH. A configured tool name is probed
    /// first; otherwise the platform candidates are tried in order.
    /// Returns `None` when nothing is available, in which case callers
    /// fall back to printing the text.
    pub fn detect(preferred: Option<&str>) -> Option<Self> {
        if let Some(name) = preferred {
            match which::which(name) {
                Ok(tool) => {
                    let args = CLIPBOARD_TOOLS
                        .iter()
                        .find(|(candidate, _)| *candidate == name)
                        .map(|(_, args)| args.to_vec())
                        .unwrap_or_default();
                    return Some(Self { tool, args });
                }
                Err(_) => {
                    debug!("Configured clipboard tool '{name}' not found on PATH");
                }
            }
        }

        for (name, args) in CLIPBOARD_TOOLS {
            if let Ok(tool) = which::which(name) {
                debug!("Using clipboard tool {}", tool.display());
                return Some(Self {
                    tool,
                    args: args.to_vec(),
                });
            }
        }

        None
    }
}

impl Clipboard for SystemClipboard {
    fn write(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.tool)
            .args(&self.args)
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to spawn {}", self.tool.display()))?;

        child
            .stdin
            .take()
            .context("Clipboard tool did not expose stdin")?
            .write_all(text.as_bytes())
            .context("Failed to pipe text to clipboard tool")?;

        let status = child.wait().context("Clipboard tool did not exit")?;
        if !status.success() {
            bail!("{} exited with {status}", self.tool.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_with_unknown_preferred_tool_does_not_panic() {
        // Falls through to the platform probe; either outcome is fine.
        let _ = SystemClipboard::detect(Some("definitely-not-a-clipboard-tool"));
    }

    #[test]
    fn test_probe_order_starts_with_macos_tool() {
        assert_eq!(CLIPBOARD_TOOLS[0].0, "pbcopy");
    }
}
