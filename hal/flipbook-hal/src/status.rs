//! Status line output

/// Single-line status display
///
/// Used for short, infrequent diagnostics ("No frames found"). On the
/// pocket device this is the small OLED above the keyboard. Output is
/// best-effort: implementations swallow their own errors.
pub trait StatusLine {
    /// Replace the status line with `message`
    fn show(&mut self, message: &str);
}
