//! Line framing for the raw byte stream.
//!
//! Outgoing lines get a CRLF terminator appended. Incoming reads are decoded
//! as (lossy) UTF-8 and trimmed of surrounding whitespace and NUL padding.

use bytes::{BufMut, Bytes, BytesMut};

/// Terminator appended to every outgoing line.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Frame `line` for the wire by appending [`LINE_TERMINATOR`].
///
/// The line is otherwise untouched: trailing whitespace is preserved and no
/// check is made for embedded line endings.
pub fn frame(line: &str) -> Bytes {
    let mut buf = BytesMut::with_capacity(line.len() + LINE_TERMINATOR.len());
    buf.put_slice(line.as_bytes());
    buf.put_slice(LINE_TERMINATOR.as_bytes());
    buf.freeze()
}

/// Characters stripped from both ends of a received reply.
#[inline]
pub fn is_trim_char(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\0')
}

/// Trim space, tab, CR, LF and NUL from both ends of `reply`.
pub fn trim_reply(reply: &str) -> &str {
    reply.trim_matches(is_trim_char)
}

/// Decode raw bytes read from the socket into a trimmed reply string.
pub fn decode_reply(raw: &[u8]) -> String {
    trim_reply(&String::from_utf8_lossy(raw)).to_string()
}
