use core::fmt::{self, Write as _};
use std::io;

use crate::Icon;

/// Options for drawing an icon as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Glyph drawn for a set pixel
    pub set_glyph: char,
    /// Glyph drawn for an unset pixel
    pub unset_glyph: char,
    /// Whether to start with the name, size and version lines
    pub header: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            set_glyph: 'x',
            unset_glyph: ' ',
            header: true,
        }
    }
}

/// Renders `icon` with [`RenderOptions::default`].
///
/// ```rust
/// use simpleicon::{icon_decode, render};
///
/// let icon = icon_decode("Smiley;;1;;4x2;;11001111")?;
/// assert_eq!(render(&icon), "Smiley (4x2)\nVersion: 1\n\nxx  \nxxxx\n");
/// # Ok::<(), simpleicon::IconError>(())
/// ```
pub fn render(icon: &Icon) -> String {
    render_with(icon, &RenderOptions::default())
}

/// Renders `icon` into a new string.
pub fn render_with(icon: &Icon, opts: &RenderOptions) -> String {
    let glyph_len = opts.set_glyph.len_utf8().max(opts.unset_glyph.len_utf8());
    let mut out = String::with_capacity((icon.width() * glyph_len + 1) * icon.height() + 64);
    // Writing into a String cannot fail
    let _ = render_to(&mut out, icon, opts);
    out
}

/// Writes the text rendering of `icon` to a formatter sink.
///
/// The header block is `"{name} ({width}x{height})"`, `"Version: {n}"` and a
/// blank line. Each pixel row follows as exactly `width` glyphs and a newline.
pub fn render_to<W: fmt::Write>(sink: &mut W, icon: &Icon, opts: &RenderOptions) -> fmt::Result {
    if opts.header {
        writeln!(sink, "{} ({}x{})", icon.name(), icon.width(), icon.height())?;
        writeln!(sink, "Version: {}", icon.version())?;
        writeln!(sink)?;
    }
    for row in icon.rows() {
        for &set in row {
            sink.write_char(if set { opts.set_glyph } else { opts.unset_glyph })?;
        }
        sink.write_char('\n')?;
    }
    Ok(())
}

/// Writes the text rendering of `icon` to a byte sink such as stdout.
pub fn write_to<W: io::Write>(sink: &mut W, icon: &Icon, opts: &RenderOptions) -> io::Result<()> {
    sink.write_all(render_with(icon, opts).as_bytes())
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_to(f, self, &RenderOptions::default())
    }
}
