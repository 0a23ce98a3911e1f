use crate::message::Message;

/// Append-only, insertion-ordered list of sent messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Appends a message and returns its index.
    ///
    /// Only the session's send path calls this; it has already rejected blank
    /// text and allocated an id greater than every stored one.
    pub(crate) fn push(&mut self, message: Message) -> usize {
        debug_assert!(!message.text().trim().is_empty());
        debug_assert!(self.last().is_none_or(|last| last.id() < message.id()));

        self.messages.push(message);
        self.messages.len() - 1
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
