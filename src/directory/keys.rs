//! Single-symbol keystroke alphabet for directory entries.

/// Symbols handed out in order: digits `1`-`9`, then `a`-`z`.
pub const KEY_ALPHABET: [&str; 35] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "a", "b", "c", "d", "e", "f", "g", "h", "i",
    "j", "k", "l", "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
];

/// What to do with a listing longer than [`KEY_ALPHABET`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Show the first 35 records and note how many were left out.
    #[default]
    Truncate,
    /// Fail the page.
    Reject,
}

/// Keystroke for the entry at `index`, if the alphabet reaches that far.
pub fn key_for(index: usize) -> Option<&'static str> {
    KEY_ALPHABET.get(index).copied()
}
