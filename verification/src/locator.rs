//! The per-platform seam: where might this account's claim document be?

use themis_types::Located;

/// Maps an identifying token to ordered candidate sources.
///
/// Locators never verify anything and never fail loudly: when the upstream
/// lookup fails they return [`Located::nothing`].
pub trait Locator {
    /// What identifies an account on this platform.
    type Token: ?Sized;

    /// Short platform name used in logs.
    fn platform(&self) -> &str;

    fn locate(&self, token: &Self::Token) -> Located;
}

impl<L: Locator + ?Sized> Locator for &L {
    type Token = L::Token;

    fn platform(&self) -> &str {
        (**self).platform()
    }

    fn locate(&self, token: &Self::Token) -> Located {
        (**self).locate(token)
    }
}
