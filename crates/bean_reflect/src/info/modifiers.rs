use bitflags::bitflags;

bitflags! {
    /// Declared modifiers of a field, method or constructor.
    ///
    /// Visibility flags are informational only: resolved handles can always
    /// read, write and call the member they point to.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct Modifiers: u8 {
        /// Visible everywhere.
        const PUBLIC    = 1 << 0;
        /// Visible to subclasses.
        const PROTECTED = 1 << 1;
        /// Visible to the declaring class only.
        const PRIVATE   = 1 << 2;
        /// Belongs to the class rather than to an instance.
        const STATIC    = 1 << 3;
        /// Must not be reassigned by the host.
        const FINAL     = 1 << 4;
    }
}

impl Modifiers {
    /// Returns `true` if the `STATIC` flag is set.
    #[inline]
    pub const fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    /// Returns `true` if the `PUBLIC` flag is set.
    #[inline]
    pub const fn is_public(self) -> bool {
        self.contains(Self::PUBLIC)
    }
}

impl Default for Modifiers {
    /// Bean properties are private unless declared otherwise.
    fn default() -> Self {
        Self::PRIVATE
    }
}
