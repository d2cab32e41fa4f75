//! Terminal rendition of the toast notices.

use prenza_core::ports::Notifier;

pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn success(&self, message: &str) {
        println!("{message}");
    }

    fn failure(&self, title: &str, description: &str) {
        eprintln!("{title}");
        eprintln!("{description}");
    }
}
