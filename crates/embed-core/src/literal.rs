//! String Literal Escaping
//!
//! Turns shader text into the body of a C string literal. Every source line
//! ends with `\n\` so the literal stays one string to the compiler while the
//! generated header keeps one shader line per physical line.
//!
//! Only line breaks are rewritten. Embedded `"` and `\` pass through untouched,
//! which means shaders containing them produce a header that will not compile.

/// Text inserted in place of each line break inside the literal
pub const LINE_CONTINUATION: &str = "\\n\\\n";

/// Normalize line endings, trim, and escape newlines for a C string literal
pub fn escape_source(source: &str) -> String {
    let normalized = normalize_line_endings(source);
    normalized
        .trim_matches(is_trimmed)
        .replace('\n', LINE_CONTINUATION)
}

/// Unicode whitespace plus the ASCII separators U+001C..U+001F
fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Render one `const char *` declaration, including its trailing newline
pub fn render_declaration(symbol: &str, source: &str) -> String {
    format!("const char * {} = \"{}\";\n", symbol, escape_source(source))
}

/// Convert `\r\n` and lone `\r` to `\n`, matching a text-mode read
fn normalize_line_endings(source: &str) -> String {
    if !source.contains('\r') {
        return source.to_string();
    }
    source.replace("\r\n", "\n").replace('\r', "\n")
}
