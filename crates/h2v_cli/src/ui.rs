//! UI helpers for consistent output formatting.

use h2v_core::SecretState;

/// Single-character Unicode glyphs used as status indicators.
pub mod indicators {
    /// Error indicator (✖).
    pub const ERROR: &str = "✖";
    /// Informational indicator (ℹ).
    pub const INFO: &str = "ℹ";
    /// Success indicator (✓).
    pub const SUCCESS: &str = "✓";
}

/// Semantic colour palette for terminal output.
pub mod colors {
    use console::Style;

    /// Red - errors and inactive secrets.
    pub const fn error() -> Style {
        Style::new().red()
    }

    /// Green - success messages and active secrets.
    pub const fn success() -> Style {
        Style::new().green()
    }

    /// Cyan - accent highlights (service ids, commands).
    pub const fn accent() -> Style {
        Style::new().cyan()
    }

    /// White bold - primary/headline text.
    pub const fn primary() -> Style {
        Style::new().white().bold()
    }

    /// Dark grey - muted/contextual text.
    pub const fn muted() -> Style {
        Style::new().color256(243)
    }
}

/// Process exit codes.
pub mod exit {
    /// The secret validated as inactive.
    pub const INACTIVE: i32 = 1;
    /// An unrecoverable error occurred.
    pub const ERROR: i32 = 2;
}

/// Returns the coloured indicator glyph for a resolved secret state.
#[must_use]
pub fn state_indicator(state: SecretState) -> String {
    match state {
        SecretState::Active => colors::success().apply_to(indicators::SUCCESS).to_string(),
        SecretState::Inactive => colors::error().apply_to(indicators::ERROR).to_string(),
    }
}

/// Prints a styled `how2validate <command>` header with surrounding blank lines.
pub fn print_command_header(command: &str) {
    println!();
    println!(
        "{} {}",
        colors::accent().bold().apply_to("how2validate"),
        colors::muted().apply_to(command)
    );
    println!();
}

/// Prints a red error message to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", colors::error().apply_to(indicators::ERROR), message);
}
