use mola_mailbox_derive::Node;

use super::link::DoubleLink;

/// A ready-made node that carries exactly one letter.
///
/// Use it when the payload type cannot embed a [`DoubleLink`] itself. The
/// letter can be an owned value or a reference to data that lives elsewhere,
/// see [`RefEnvelope`].
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct Envelope<T> {
    #[node(link)]
    link: DoubleLink<Self>,
    #[node(data)]
    data: T,
}

/// An envelope whose letter is borrowed from the caller.
pub type RefEnvelope<'a, P> = Envelope<&'a P>;

impl<T> Envelope<T> {
    /// Creates an unlinked envelope around `data`.
    pub const fn new(data: T) -> Self {
        Self {
            link: DoubleLink::new(),
            data,
        }
    }

    /// Consumes the envelope and returns the letter.
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T: Default> Default for Envelope<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Envelope<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Envelope<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Envelope")
            .field("link", &self.link)
            .field("data", &self.data)
            .finish()
    }
}
