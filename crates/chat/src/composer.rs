/// Draft text held by the composer region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    draft: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the draft unconditionally.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// True when the draft is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.draft.trim().is_empty()
    }

    /// Takes the draft for sending, leaving the composer empty.
    ///
    /// Blank drafts are not taken; the composer keeps them as typed.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.is_blank() {
            return None;
        }

        Some(std::mem::take(&mut self.draft))
    }
}
