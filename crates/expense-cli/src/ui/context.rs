//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether stdin is a TTY (prompts need both)
    pub stdin_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

/// What the process environment says about the terminal.
#[derive(Debug, Clone, Copy)]
struct TerminalProbe {
    stdout_tty: bool,
    stdin_tty: bool,
    stderr_tty: bool,
    term_is_dumb: bool,
    no_color_env: bool,
    width: Option<usize>,
}

impl TerminalProbe {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stdin_tty: std::io::stdin().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            term_is_dumb: std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
            width: terminal_width(),
        }
    }
}

impl TerminalProbe {
    /// The same environment, seen from stderr.
    fn on_stderr(self) -> Self {
        Self {
            stdout_tty: self.stderr_tty,
            ..self
        }
    }
}

impl UiContext {
    /// Create context from environment and CLI flags.
    ///
    /// # Arguments
    /// * `json_flag` - Whether `--json` was passed
    /// * `format_flag` - Value of `--format` if provided
    /// * `no_color_flag` - Whether `--no-color` was passed
    /// * `ascii_flag` - Whether `--ascii` was passed
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        Self::from_probe(
            TerminalProbe::detect(),
            json_flag,
            format_flag,
            no_color_flag,
            ascii_flag,
        )
    }

    /// Create context for output written to stderr.
    ///
    /// Color and pretty rendering follow whether stderr is a terminal,
    /// regardless of where stdout goes.
    pub fn for_stderr(no_color_flag: bool, ascii_flag: bool) -> Self {
        Self::from_probe(
            TerminalProbe::detect().on_stderr(),
            false,
            None,
            no_color_flag,
            ascii_flag,
        )
    }

    fn from_probe(
        probe: TerminalProbe,
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let mode = OutputMode::resolve(json_flag, format_flag, probe.stdout_tty, probe.term_is_dumb);
        Self {
            is_tty: probe.stdout_tty,
            stdin_tty: probe.stdin_tty,
            color: probe.stdout_tty && !no_color_flag && !probe.no_color_env && !probe.term_is_dumb,
            unicode: !ascii_flag,
            width: probe.width.unwrap_or(80),
            mode,
        }
    }

    /// Check if interactive prompts are allowed.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && self.stdin_tty
    }
}

/// Terminal width from `COLUMNS`, then the tty itself.
fn terminal_width() -> Option<usize> {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|width| *width > 0);
    if from_env.is_some() {
        return from_env;
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ writes a winsize into the pointer on success.
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            // SAFETY: the ioctl succeeded, so winsize is initialized.
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty() -> TerminalProbe {
        TerminalProbe {
            stdout_tty: true,
            stdin_tty: true,
            stderr_tty: true,
            term_is_dumb: false,
            no_color_env: false,
            width: Some(120),
        }
    }

    #[test]
    fn test_tty_is_pretty_and_colored() {
        let ctx = UiContext::from_probe(tty(), false, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Pretty);
        assert!(ctx.color);
        assert!(ctx.is_interactive());
        assert_eq!(ctx.width, 120);
    }

    #[test]
    fn test_pipe_is_plain_without_color() {
        let probe = TerminalProbe {
            stdout_tty: false,
            width: None,
            ..tty()
        };
        let ctx = UiContext::from_probe(probe, false, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Plain);
        assert!(!ctx.color);
        assert!(!ctx.is_interactive());
        assert_eq!(ctx.width, 80);
    }

    #[test]
    fn test_piped_stdin_is_not_interactive() {
        let probe = TerminalProbe {
            stdin_tty: false,
            ..tty()
        };
        let ctx = UiContext::from_probe(probe, false, None, false, false);
        assert!(!ctx.is_interactive());
    }

    #[test]
    fn test_no_color_sources() {
        assert!(!UiContext::from_probe(tty(), false, None, true, false).color);

        let env = TerminalProbe {
            no_color_env: true,
            ..tty()
        };
        assert!(!UiContext::from_probe(env, false, None, false, false).color);

        let dumb = TerminalProbe {
            term_is_dumb: true,
            ..tty()
        };
        let ctx = UiContext::from_probe(dumb, false, None, false, false);
        assert!(!ctx.color);
        assert_eq!(ctx.mode, OutputMode::Plain);
    }

    #[test]
    fn test_redirected_stderr_is_plain() {
        let probe = TerminalProbe {
            stderr_tty: false,
            ..tty()
        };
        assert!(UiContext::from_probe(probe, false, None, false, false).color);

        let errors = UiContext::from_probe(probe.on_stderr(), false, None, false, false);
        assert_eq!(errors.mode, OutputMode::Plain);
        assert!(!errors.color);
    }

    #[test]
    fn test_ascii_disables_unicode() {
        let ctx = UiContext::from_probe(tty(), false, None, false, true);
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_json_flag_wins() {
        let ctx = UiContext::from_probe(tty(), true, Some("table"), false, false);
        assert!(ctx.mode.is_json());
    }
}
