//! Free-text note

use crate::collections::HasId;
use crate::ids::MemoId;

#[derive(Debug, Clone, PartialEq)]
pub struct Memo {
    id: MemoId,
    title: String,
    text: String,
    checked: bool,
}

impl Memo {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: MemoId::new(),
            title: title.into(),
            text: text.into(),
            checked: false,
        }
    }

    /// Reconstruct from stored data
    pub fn from_parts(id: MemoId, title: String, text: String, checked: bool) -> Self {
        Self {
            id,
            title,
            text,
            checked,
        }
    }

    pub fn id(&self) -> &MemoId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn duplicated(&self) -> Self {
        Self {
            id: MemoId::new(),
            ..self.clone()
        }
    }
}

impl HasId for Memo {
    type Id = MemoId;

    fn id(&self) -> &MemoId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_keep_id() {
        let memo = Memo::new("Boss", "weak to fire");
        let edited = memo
            .clone()
            .with_title("Final boss")
            .with_text("weak to ice")
            .with_checked(true);
        assert_eq!(edited.id(), memo.id());
        assert_eq!(edited.title(), "Final boss");
        assert_eq!(edited.text(), "weak to ice");
        assert!(edited.checked());
    }

    #[test]
    fn test_duplicated_mints_new_id() {
        let memo = Memo::new("Route", "left, then up").with_checked(true);
        let copy = memo.duplicated();
        assert_ne!(copy.id(), memo.id());
        assert_eq!(copy.title(), memo.title());
        assert_eq!(copy.text(), memo.text());
        assert_eq!(copy.checked(), memo.checked());
    }
}
