/// A translation key referenced from a template through the `t` filter.
///
/// Produced by scanning one template file; references of a file keep
/// document order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reference {
    /// Path to the template file (e.g. "./templates/product.liquid").
    pub file: String,
    /// Character offset where the filter invocation starts.
    pub offset: usize,
    /// The key to look up, including the `.other` suffix for pluralized references.
    pub key: String,
    /// True when the invocation passes a `count:` argument.
    pub pluralized: bool,
}

impl Reference {
    pub fn new(file: impl Into<String>, offset: usize, key: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            offset,
            key: key.into(),
            pluralized: false,
        }
    }

    /// Resolve the reference through the `other` plural bucket.
    pub fn pluralize(mut self) -> Self {
        if !self.pluralized {
            self.key.push_str(".other");
            self.pluralized = true;
        }
        self
    }
}
