//! Input modes.
//!
//! The pane is either editing the text input (where arrows and Enter drive the
//! suggestion list) or moving a cursor across the selected role chips so they
//! can be removed from the keyboard.

/// Which part of the pane receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keystrokes edit the input; ↑/↓/Enter/Esc go to the suggestion list.
    #[default]
    Typing,

    /// ←/→ move across selected roles; Delete, Backspace or `x` removes the
    /// focused one.
    Chips,
}
