pub const LOCKED_OVERFLOW: &str = "hidden";

/// Longhands written by the lock. The `overflow` shorthand reads back empty
/// whenever only one of them is set, so each is saved on its own.
pub const OVERFLOW_PROPERTIES: [&str; 2] = ["overflow-x", "overflow-y"];

/// One inline declaration: value plus priority (`"important"` or empty).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineDecl {
    pub value: String,
    pub priority: String,
}

impl InlineDecl {
    pub fn new(value: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            priority: priority.into(),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.value.is_empty()
    }
}

/// Something whose scroll can be switched off through inline `overflow-*`
/// styles, usually `document.body`.
pub trait ScrollHost {
    /// Inline declaration for `property`; unset when there is none.
    fn declaration(&self, property: &str) -> InlineDecl;
    /// Writes `decl` inline; an unset declaration removes the property.
    fn set_declaration(&self, property: &str, decl: &InlineDecl);
}

/// Disables scrolling on `host` until dropped, then puts back exactly what was
/// there before, priorities included.
///
/// Locks nest: each guard restores what it saw, so dropping in reverse order
/// unwinds to the original state.
#[must_use = "scrolling is restored as soon as the lock is dropped"]
pub struct ScrollLock<H: ScrollHost> {
    host: H,
    previous: [InlineDecl; 2],
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn acquire(host: H) -> Self {
        let previous = OVERFLOW_PROPERTIES.map(|property| host.declaration(property));
        let locked = InlineDecl::new(LOCKED_OVERFLOW, "");
        for property in OVERFLOW_PROPERTIES {
            host.set_declaration(property, &locked);
        }
        Self { host, previous }
    }

    /// Saved `overflow-x` and `overflow-y`, in that order.
    pub fn previous(&self) -> &[InlineDecl; 2] {
        &self.previous
    }
}

impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        for (property, decl) in OVERFLOW_PROPERTIES.iter().zip(&self.previous) {
            self.host.set_declaration(property, decl);
        }
    }
}
