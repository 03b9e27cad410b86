/// Visual indent written once per list level.
pub const INDENT: &str = "&nbsp;";

/// Bullet glyphs by list level: square, disc, circle, star.
pub const LIST_ICONS: [&str; 4] = ["&#x25A0;", "&#x25CF;", "&#x25CB;", "&#x2605;"];

/// Bullet for `level`; anything past the table falls back to the square.
pub fn list_icon(level: usize) -> &'static str {
    LIST_ICONS.get(level).copied().unwrap_or(LIST_ICONS[0])
}
