/// Copies `value` left-justified into a zero-filled buffer. `None` if it does not fit.
pub fn pad_bytes<const N: usize>(value: &str) -> Option<[u8; N]> {
    let bytes = value.as_bytes();
    if bytes.len() > N {
        return None;
    }

    let mut buf = [0u8; N];
    buf[..bytes.len()].copy_from_slice(bytes);
    Some(buf)
}

/// Strips trailing zero fill.
pub fn trim_bytes(bytes: &[u8]) -> &[u8] {
    let len = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..len]
}

pub fn bytes_to_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(trim_bytes(bytes)).into_owned()
}

/// Zero bytes cannot survive the padded round trip.
pub fn contains_nul(value: &str) -> bool {
    value.as_bytes().contains(&0)
}

pub fn fixed_bytes_eq(stored: &[u8], value: &str) -> bool {
    trim_bytes(stored) == value.as_bytes()
}
