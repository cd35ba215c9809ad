/// Result of feeding bytes to a [`Parser`].
///
/// [`Parser`]: crate::Parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A complete request line and header block has been recognized.
    Good,
    /// The input is malformed, the parser must be reset before reuse.
    Bad,
    /// Valid so far, more bytes are required.
    Indeterminate,
}

impl Status {
    /// Returns `true` if the status is [`Good`].
    ///
    /// [`Good`]: Status::Good
    #[inline]
    pub const fn is_good(&self) -> bool {
        matches!(self, Self::Good)
    }

    /// Returns `true` if the status is [`Bad`].
    ///
    /// [`Bad`]: Status::Bad
    #[inline]
    pub const fn is_bad(&self) -> bool {
        matches!(self, Self::Bad)
    }

    /// Returns `true` if the status is [`Indeterminate`].
    ///
    /// [`Indeterminate`]: Status::Indeterminate
    #[inline]
    pub const fn is_indeterminate(&self) -> bool {
        matches!(self, Self::Indeterminate)
    }

    /// Returns `true` if the status is [`Good`] or [`Bad`].
    ///
    /// A terminal status means the parser will make no further progress
    /// until it is reset.
    ///
    /// [`Good`]: Status::Good
    /// [`Bad`]: Status::Bad
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        !self.is_indeterminate()
    }
}
