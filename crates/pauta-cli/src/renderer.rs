//! Terminal rendering module for rich markdown output
//!
//! Renders the core's markdown Display output via termimad, with a plain
//! text fallback for `--no-color` and non-interactive use.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        // Configure termimad skin for better appearance
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Create a plain-text renderer, equivalent to `--no-color`.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Keep hash symbols visible on header lines so the output stays
            // copy-pastable as markdown
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
            if !markdown.ends_with('\n') {
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::plain();
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
