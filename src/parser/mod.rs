//! Incremental HTTP/1.x request parser.
//!
//! # Parsing
//!
//! [`Parser::parse`] feeds bytes one at a time into a flat state machine,
//! filling a caller owned [`Request`] as fields are recognized. Given any
//! length of bytes, it returns how much was consumed and a three way
//! [`Status`]: [`Good`] when the empty line ending the header block has been
//! recognized, [`Bad`] on malformed input, and [`Indeterminate`] when the
//! input ran out mid request, where more bytes is required and parsing can be
//! resumed with a later call.
//!
//! Parser state persists across calls, so the bytes never have to be
//! buffered into one contiguous request before parsing begins. The parser
//! itself holds no bytes, only the state tag, everything recognized so far
//! already lives in the [`Request`].
//!
//! [`Good`]: Status::Good
//! [`Bad`]: Status::Bad
//! [`Indeterminate`]: Status::Indeterminate
use crate::headers::Header;
use crate::log::{debug, warning};
use crate::matches::{is_ctl, is_digit, is_token};
use crate::request::Request;
use crate::status::Status;


/// Rule for splitting a request target into `handler_path` and `file_path`.
///
/// Splitting happens while bytes stream in, so every rule here is decidable
/// one byte at a time with no lookahead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetSplit {
    /// Split an origin-form target at the second slash.
    ///
    /// The leading segment selects the handler, the rest names a file
    /// beneath it: `/static/css/site.css` gives `handler_path = "/static"`
    /// and `file_path = "/css/site.css"`. A single segment target leaves
    /// `file_path` empty. Targets not starting with `/` (asterisk-form,
    /// absolute-form) are never split.
    #[default]
    Segment,
    /// Keep every target whole in `handler_path`.
    Whole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    MethodStart,
    Method,
    TargetStart,
    HandlerPath,
    FilePath,
    Uri,
    VersionH,
    VersionT1,
    VersionT2,
    VersionP,
    VersionSlash,
    VersionMajorStart,
    VersionMajor,
    VersionMinorStart,
    VersionMinor,
    Newline1,
    HeaderLineStart,
    HeaderLws,
    HeaderName,
    SpaceBeforeHeaderValue,
    HeaderValue,
    Newline2,
    Newline3,
}

/// Incremental HTTP/1.x request line and header parser.
///
/// One instance per connection; [`reset`] between requests. A single
/// instance must not be shared across threads mid parse, it is a plain
/// synchronous state object with no internal synchronization.
///
/// [`reset`]: Parser::reset
#[derive(Debug, Clone)]
pub struct Parser {
    state: State,
    split: TargetSplit,
}

impl Default for Parser {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create new [`Parser`] with the default [`TargetSplit::Segment`] rule.
    #[inline]
    pub const fn new() -> Self {
        Self::with_split(TargetSplit::Segment)
    }

    /// Create new [`Parser`] with the given target split rule.
    #[inline]
    pub const fn with_split(split: TargetSplit) -> Self {
        Self { state: State::MethodStart, split }
    }

    /// Returns the configured target split rule.
    #[inline]
    pub const fn split(&self) -> TargetSplit {
        self.split
    }

    /// Resets parser state for the next request.
    ///
    /// Only the parser is reset; clearing the [`Request`] record is the
    /// caller's responsibility, see [`Request::clear`].
    #[inline]
    pub fn reset(&mut self) {
        self.state = State::MethodStart;
    }

    /// Parse some bytes, resuming from wherever the previous call stopped.
    ///
    /// Returns the [`Status`] and the count of consumed bytes. On [`Good`]
    /// and [`Bad`] the byte that triggered the outcome is included in the
    /// count and no byte past it is consumed. On [`Indeterminate`] the whole
    /// of `buf` was consumed and the caller should call again with more
    /// bytes, the same `req`, and this parser.
    ///
    /// After [`Bad`] the parser makes no further progress until [`reset`].
    ///
    /// [`Good`]: Status::Good
    /// [`Bad`]: Status::Bad
    /// [`Indeterminate`]: Status::Indeterminate
    /// [`reset`]: Parser::reset
    pub fn parse(&mut self, req: &mut Request, buf: &[u8]) -> (Status, usize) {
        for (at, &byte) in buf.iter().enumerate() {
            let status = self.consume(req, byte);
            if status.is_terminal() {
                if status.is_good() {
                    debug!("parsed request: {} {} {}", req.method, req.target(), req.version);
                } else {
                    warning!("malformed request at byte {byte:#04x}");
                }
                return (status, at + 1);
            }
        }
        (Status::Indeterminate, buf.len())
    }

    /// Parse from a [`bytes::Buf`], advancing it by what was consumed.
    ///
    /// Chunk iterating adapter over [`parse`](Parser::parse), same contract.
    pub fn parse_buf<B: bytes::Buf>(&mut self, req: &mut Request, mut buf: B) -> Status {
        while buf.has_remaining() {
            let (status, read) = self.parse(req, buf.chunk());
            buf.advance(read);
            if status.is_terminal() {
                return status;
            }
        }
        Status::Indeterminate
    }

    /// Handle the next byte of input.
    fn consume(&mut self, req: &mut Request, byte: u8) -> Status {
        use State::*;

        match self.state {
            MethodStart => {
                if !is_token(byte) {
                    return Status::Bad;
                }
                req.method.push(byte as char);
                self.state = Method;
            }
            Method => match byte {
                b' ' => self.state = TargetStart,
                byte if is_token(byte) => req.method.push(byte as char),
                _ => return Status::Bad,
            },
            TargetStart => match byte {
                b' ' => return Status::Bad,
                byte if is_ctl(byte) => return Status::Bad,
                b'/' if self.split == TargetSplit::Segment => {
                    req.handler_path.push('/');
                    self.state = HandlerPath;
                }
                byte => {
                    req.handler_path.push(byte as char);
                    self.state = Uri;
                }
            },
            HandlerPath => match byte {
                b' ' => self.state = VersionH,
                byte if is_ctl(byte) => return Status::Bad,
                b'/' => {
                    req.file_path.push('/');
                    self.state = FilePath;
                }
                byte => req.handler_path.push(byte as char),
            },
            FilePath => match byte {
                b' ' => self.state = VersionH,
                byte if is_ctl(byte) => return Status::Bad,
                byte => req.file_path.push(byte as char),
            },
            Uri => match byte {
                b' ' => self.state = VersionH,
                byte if is_ctl(byte) => return Status::Bad,
                byte => req.handler_path.push(byte as char),
            },
            VersionH => match byte {
                b'H' => self.state = VersionT1,
                _ => return Status::Bad,
            },
            VersionT1 => match byte {
                b'T' => self.state = VersionT2,
                _ => return Status::Bad,
            },
            VersionT2 => match byte {
                b'T' => self.state = VersionP,
                _ => return Status::Bad,
            },
            VersionP => match byte {
                b'P' => self.state = VersionSlash,
                _ => return Status::Bad,
            },
            VersionSlash => match byte {
                b'/' => self.state = VersionMajorStart,
                _ => return Status::Bad,
            },
            VersionMajorStart => match byte {
                byte if is_digit(byte) => {
                    req.version.push_major_digit(byte);
                    self.state = VersionMajor;
                }
                _ => return Status::Bad,
            },
            VersionMajor => match byte {
                b'.' => self.state = VersionMinorStart,
                byte if is_digit(byte) => req.version.push_major_digit(byte),
                _ => return Status::Bad,
            },
            VersionMinorStart => match byte {
                byte if is_digit(byte) => {
                    req.version.push_minor_digit(byte);
                    self.state = VersionMinor;
                }
                _ => return Status::Bad,
            },
            VersionMinor => match byte {
                b'\r' => self.state = Newline1,
                byte if is_digit(byte) => req.version.push_minor_digit(byte),
                _ => return Status::Bad,
            },
            Newline1 => match byte {
                b'\n' => self.state = HeaderLineStart,
                _ => return Status::Bad,
            },
            HeaderLineStart => match byte {
                b'\r' => self.state = Newline3,
                // a continuation line must have a field to fold into
                b' ' | b'\t' if !req.headers.is_empty() => self.state = HeaderLws,
                byte if is_token(byte) => {
                    let mut field = Header::new();
                    field.name.push(byte as char);
                    req.headers.push(field);
                    self.state = HeaderName;
                }
                _ => return Status::Bad,
            },
            HeaderLws => match byte {
                b'\r' => self.state = Newline2,
                // runs of leading whitespace collapse into the single
                // folding space added with the first content byte
                b' ' | b'\t' => {}
                byte if is_ctl(byte) => return Status::Bad,
                byte => {
                    let Some(field) = req.headers.last_mut() else {
                        return Status::Bad;
                    };
                    field.value.push(' ');
                    field.value.push(byte as char);
                    self.state = HeaderValue;
                }
            },
            HeaderName => match byte {
                b':' => self.state = SpaceBeforeHeaderValue,
                byte if is_token(byte) => {
                    let Some(field) = req.headers.last_mut() else {
                        return Status::Bad;
                    };
                    field.name.push(byte as char);
                }
                _ => return Status::Bad,
            },
            SpaceBeforeHeaderValue => match byte {
                b' ' => self.state = HeaderValue,
                _ => return Status::Bad,
            },
            HeaderValue => match byte {
                b'\r' => self.state = Newline2,
                byte if is_ctl(byte) => return Status::Bad,
                byte => {
                    let Some(field) = req.headers.last_mut() else {
                        return Status::Bad;
                    };
                    field.value.push(byte as char);
                }
            },
            Newline2 => match byte {
                b'\n' => self.state = HeaderLineStart,
                _ => return Status::Bad,
            },
            Newline3 => {
                return match byte {
                    b'\n' => Status::Good,
                    _ => Status::Bad,
                };
            }
        }

        Status::Indeterminate
    }
}
