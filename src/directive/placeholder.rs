// src/directive/placeholder.rs

/// Token replaced by the file name (`foo.tex`).
pub const FILE_NAME_TOKEN: &str = "%f";

/// Token replaced by the name-stem (`foo`).
pub const STEM_TOKEN: &str = "%n";

/// Replace every `%f` with `file_name` and every `%n` with `stem`.
///
/// Single left-to-right pass: text coming from a replacement value is
/// never scanned again, so a file literally named `%n.txt` stays intact.
/// Any other `%` sequence is copied through untouched.
pub fn substitute(template: &str, file_name: &str, stem: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(idx) = rest.find('%') {
        out.push_str(&rest[..idx]);
        let after = &rest[idx + 1..];
        match after.as_bytes().first() {
            Some(b'f') => {
                out.push_str(file_name);
                rest = &after[1..];
            }
            Some(b'n') => {
                out.push_str(stem);
                rest = &after[1..];
            }
            _ => {
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
