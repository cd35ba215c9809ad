//! Caller owned request record.
use crate::headers::Headers;
use crate::version::Version;

/// An HTTP request head, populated incrementally by [`Parser`].
///
/// The record is owned by the caller and only mutated by the parser. Its
/// content is meaningful only once the parser reports [`Status::Good`];
/// fields are built monotonically and a closed field is never revisited
/// within one parse.
///
/// The request target is kept split in two: `handler_path` selects a
/// handler and `file_path` names a resource beneath it, see
/// [`TargetSplit`] for the splitting rule.
///
/// [`Parser`]: crate::Parser
/// [`Status::Good`]: crate::Status::Good
/// [`TargetSplit`]: crate::TargetSplit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub handler_path: String,
    pub file_path: String,
    pub version: Version,
    pub headers: Headers,
}

impl Request {
    /// Create new empty [`Request`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            method: String::new(),
            handler_path: String::new(),
            file_path: String::new(),
            version: Version::new(0, 0),
            headers: Headers::new(),
        }
    }

    /// Returns the full request target, the split fields rejoined.
    pub fn target(&self) -> String {
        let mut target = String::with_capacity(self.handler_path.len() + self.file_path.len());
        target.push_str(&self.handler_path);
        target.push_str(&self.file_path);
        target
    }

    /// Clears the record for reuse, keeping allocated capacity.
    ///
    /// A cleared record is indistinguishable from a freshly constructed one
    /// to the parser. Clearing the record and resetting the parser are
    /// independent, the caller owns both steps.
    pub fn clear(&mut self) {
        self.method.clear();
        self.handler_path.clear();
        self.file_path.clear();
        self.version = Version::new(0, 0);
        self.headers.clear();
    }
}
