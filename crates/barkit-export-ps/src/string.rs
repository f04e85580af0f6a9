//! PostScript string literals

/// Escape `text` for use inside `( )` and fold it to ISO 8859-1
///
/// UTF-8 sequences `C2 xx` and `C3 xx` become the single Latin-1 byte they
/// encode; any other non-ASCII byte is dropped.
pub fn ps_string(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() + 8);
    let mut iter = bytes.iter().copied();
    while let Some(b) = iter.next() {
        match b {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(b);
            },
            0xC2 => out.extend(iter.next()),
            0xC3 => out.extend(iter.next().map(|c| c.wrapping_add(64))),
            0x00..=0x7F => out.push(b),
            _ => {},
        }
    }
    out
}
