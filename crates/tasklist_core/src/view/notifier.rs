//! Blocking user-notification seam.

/// Front-end hooks for interrupting the user.
///
/// Both calls block the interaction until the user responds.
pub trait Notifier {
    /// Shows a failure message the user must acknowledge.
    fn alert(&mut self, message: &str);

    /// Asks a yes/no question; `true` means the user confirmed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}
