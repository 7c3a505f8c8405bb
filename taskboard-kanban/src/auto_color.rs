//! Stable colors for lists that arrive without one.
//!
//! Lists are the only colored entity on a board. Labels are plain strings
//! used for grouping and filtering, so nothing else needs a palette entry.
//! The color is keyed on the list id rather than its title: renaming a column
//! keeps its color, and two snapshots of the same board render alike.

/// Column colors as 6-char hex without `#`
const PALETTE: [&str; 12] = [
    "6366f1", "0ea5e9", "14b8a6", "22c55e", "84cc16", "eab308", "f97316", "ef4444", "ec4899",
    "a855f7", "64748b", "78716c",
];

/// Color for a list id, always one of the palette entries
pub fn auto_color(list_id: &str) -> &'static str {
    PALETTE[palette_index(list_id)]
}

/// 32-bit FNV-1a over the id bytes, reduced to a palette slot
fn palette_index(list_id: &str) -> usize {
    const OFFSET: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;
    let hash = list_id
        .bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u32::from(byte)).wrapping_mul(PRIME));
    hash as usize % PALETTE.len()
}
