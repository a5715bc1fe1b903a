// Line Framing
// Fixed-width frames carrying a line-number marker at both ends

/// Maximum characters of line content carried in one frame.
pub const MAX_CHARS_PER_LINE: usize = 96;

/// Total width of a framed line in characters.
pub const FRAME_WIDTH: usize = 102;

/// Width of each of the two half-blocks.
pub const HALF_WIDTH: usize = FRAME_WIDTH / 2;

/// Width of the line-number marker at each end of a frame.
pub const LINE_NUM_WIDTH: usize = 3;

/// Truncate a line to the maximum content width.
pub fn truncate(line: &str) -> &str {
    match line.char_indices().nth(MAX_CHARS_PER_LINE) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}

/// Build a fixed-width frame: a zero-padded line number, the content,
/// space padding out to the frame width, and the same line number again as
/// a trailing marker.
///
/// The content must already be truncated to [`MAX_CHARS_PER_LINE`]. Line
/// numbers wrap modulo 1000 so the marker field keeps its fixed width.
pub fn frame(content: &str, line_num: usize) -> String {
    let marker = format!("{:03}", line_num % 1000);
    let pad = FRAME_WIDTH - 2 * LINE_NUM_WIDTH - content.chars().count();

    let mut framed = String::with_capacity(FRAME_WIDTH);
    framed.push_str(&marker);
    framed.push_str(content);
    framed.push_str(&" ".repeat(pad));
    framed.push_str(&marker);
    framed
}

/// Split a frame into its two half-blocks of [`HALF_WIDTH`] characters.
pub fn split_halves(framed: &str) -> (&str, &str) {
    let mid = framed
        .char_indices()
        .nth(HALF_WIDTH)
        .map(|(idx, _)| idx)
        .unwrap_or(framed.len());
    framed.split_at(mid)
}

/// Read the line number carried in a frame's leading marker.
pub fn line_number(framed: &str) -> Option<u32> {
    framed
        .get(..LINE_NUM_WIDTH)
        .and_then(|marker| marker.parse().ok())
}

/// Strip the line-number markers from both ends of a reassembled frame and
/// drop the trailing space padding.
pub fn unframe(framed: &str) -> String {
    let chars: Vec<char> = framed.chars().collect();
    if chars.len() <= 2 * LINE_NUM_WIDTH {
        return String::new();
    }

    let inner = &chars[LINE_NUM_WIDTH..chars.len() - LINE_NUM_WIDTH];
    let content_len = inner
        .iter()
        .rposition(|&c| c != ' ')
        .map_or(0, |pos| pos + 1);
    inner[..content_len].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        let line96: String = "x".repeat(96);
        let line97: String = "x".repeat(97);
        assert_eq!(truncate(&line96), line96);
        assert_eq!(truncate(&line97), line96);
        assert_eq!(truncate("short"), "short");
    }

    #[test]
    fn test_frame_layout() {
        let framed = frame("A", 1);
        assert_eq!(framed.len(), FRAME_WIDTH);
        assert_eq!(framed, format!("001A{}001", " ".repeat(95)));
    }

    #[test]
    fn test_frame_full_content() {
        let content = "y".repeat(MAX_CHARS_PER_LINE);
        let framed = frame(&content, 42);
        assert_eq!(framed.chars().count(), FRAME_WIDTH);
        assert!(framed.starts_with("042"));
        assert!(framed.ends_with("042"));
    }

    #[test]
    fn test_line_number_wraps() {
        assert!(frame("a", 1000).starts_with("000"));
        assert!(frame("a", 1234).starts_with("234"));
    }

    #[test]
    fn test_split_halves() {
        let framed = frame("hello", 7);
        let (first, second) = split_halves(&framed);
        assert_eq!(first.chars().count(), HALF_WIDTH);
        assert_eq!(second.chars().count(), HALF_WIDTH);
        assert_eq!(format!("{first}{second}"), framed);
    }

    #[test]
    fn test_line_number() {
        assert_eq!(line_number(&frame("abc", 37)), Some(37));
        assert_eq!(line_number("xyz..."), None);
    }

    #[test]
    fn test_unframe() {
        let framed = frame("payload text", 12);
        assert_eq!(unframe(&framed), "payload text");
    }

    #[test]
    fn test_unframe_keeps_inner_spaces() {
        let framed = frame("a  b", 3);
        assert_eq!(unframe(&framed), "a  b");
    }

    #[test]
    fn test_unframe_empty_content() {
        let framed = frame("", 5);
        assert_eq!(unframe(&framed), "");
    }
}
