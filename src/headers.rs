//! Ordered HTTP header list.
use std::fmt;
use std::slice;

/// A single header field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    /// Create new empty [`Header`].
    #[inline]
    pub const fn new() -> Self {
        Self { name: String::new(), value: String::new() }
    }
}

/// Insertion ordered HTTP header list.
///
/// Insertion order is preserved and duplicate names are kept as separate
/// entries, both can be semantically relevant in HTTP.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers {
    fields: Vec<Header>,
}

impl Headers {
    /// Create new empty [`Headers`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Returns headers length.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Clears the list, removing all fields.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Appends a field to the end of the list.
    #[inline]
    pub fn push(&mut self, header: Header) {
        self.fields.push(header);
    }

    /// Returns the value of the first field matching `name`.
    ///
    /// Header names compare ASCII case insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
            .map(|field| field.value.as_str())
    }

    /// Returns all values of fields matching `name` in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        self.fields
            .iter()
            .filter(move |field| field.name.eq_ignore_ascii_case(name))
            .map(|field| field.value.as_str())
    }

    /// Returns an iterator over the fields in insertion order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Header> {
        self.fields.iter()
    }

    /// Returns a mutable reference to the most recently pushed field.
    ///
    /// Line folding appends continuation content here.
    #[inline]
    pub(crate) fn last_mut(&mut self) -> Option<&mut Header> {
        self.fields.last_mut()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = slice::Iter<'a, Header>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|field| (&field.name, &field.value)))
            .finish()
    }
}
