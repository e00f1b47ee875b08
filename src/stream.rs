//! Replacement-on-error output stream encoding

use crate::error::{Result, RunnerError};
use encoding_rs::{Encoding, UTF_8};
use std::io::{self, Write};

const REPLACEMENT: char = '?';

/// Wraps an output stream so writes never fail on encoding mismatches.
///
/// Text is re-encoded into the target stream's declared encoding before
/// being forwarded; characters the encoding cannot represent are substituted
/// with `?` instead of raising an error.
#[derive(Debug)]
pub struct SafeStream<W: Write> {
    target: W,
    encoding: &'static Encoding,
}

impl<W: Write> SafeStream<W> {
    /// Wrap a stream with the default UTF-8 target encoding.
    pub fn new(target: W) -> Self {
        Self {
            target,
            encoding: UTF_8,
        }
    }

    /// Wrap a stream that declares its encoding by WHATWG label,
    /// e.g. `"windows-1252"` or `"shift_jis"`.
    pub fn with_encoding(target: W, label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.as_bytes())
            .ok_or_else(|| RunnerError::encoding(label))?;
        Ok(Self { target, encoding })
    }

    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Re-encode `text` into the target encoding and forward it.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        let (encoded, _, had_errors) = self.encoding.encode(text);
        if !had_errors {
            return self.target.write_all(&encoded);
        }
        // encoding_rs substitutes numeric character references; the contract
        // here is single-character replacement, so swap the offenders first.
        let substituted: String = text
            .chars()
            .map(|c| if encodes(self.encoding, c) { c } else { REPLACEMENT })
            .collect();
        let (encoded, _, _) = self.encoding.encode(&substituted);
        self.target.write_all(&encoded)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.target.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.target
    }

    pub fn into_inner(self) -> W {
        self.target
    }
}

fn encodes(encoding: &'static Encoding, c: char) -> bool {
    let mut buf = [0u8; 4];
    let (_, _, had_errors) = encoding.encode(c.encode_utf8(&mut buf));
    !had_errors
}

impl<W: Write> Write for SafeStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_str(&String::from_utf8_lossy(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.target.flush()
    }
}
