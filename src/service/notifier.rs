//! Output interface for action notifications.

/// Sink for the messages actions emit while a service runs.
///
/// Keeping output behind this trait lets the transition logic stay pure and
/// lets tests capture what a real machine would print.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Writes each notification to standard output on its own line.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Keeps notifications in memory, in the order they were emitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BufferedNotifier {
    messages: Vec<String>,
}

impl BufferedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Take every buffered message, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_notifier_keeps_order() {
        let mut notifier = BufferedNotifier::new();
        notifier.notify("first");
        notifier.notify("second");

        assert_eq!(notifier.messages(), &["first", "second"]);
    }

    #[test]
    fn drain_empties_the_buffer() {
        let mut notifier = BufferedNotifier::new();
        notifier.notify("only");

        assert_eq!(notifier.drain(), vec!["only".to_string()]);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn mutable_references_forward_notifications() {
        fn emit<N: Notifier>(mut notifier: N) {
            notifier.notify("through a reference");
        }

        let mut notifier = BufferedNotifier::new();
        emit(&mut notifier);

        assert_eq!(notifier.messages().len(), 1);
    }
}
