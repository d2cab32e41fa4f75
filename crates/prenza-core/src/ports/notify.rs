/// Toast-style notices shown to the user.
///
/// Presentation collaborator only; the flows never put error causes in
/// here, just the user-facing copy.
pub trait Notifier: Send + Sync {
    /// Show a short success message.
    fn success(&self, message: &str);

    /// Show a failure notice with a title and description.
    fn failure(&self, title: &str, description: &str);
}
