//! Safe text assignment into page nodes.

/// A node whose displayed text can be replaced.
///
/// Implementations must treat the string as literal text, never as markup.
pub trait TextTarget {
    fn set_text_content(&mut self, text: &str);
}

/// Sets the displayed text of `target` to exactly `text`.
///
/// A missing target is a no-op.
pub fn assign_text_safely<T: TextTarget + ?Sized>(target: Option<&mut T>, text: &str) {
    match target {
        Some(node) => node.set_text_content(text),
        None => tracing::debug!("assign_text_safely: no target node, skipping"),
    }
}

/// In-memory node holding plain text, for callers without a rendering environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNode {
    text: String,
}

impl TextNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextTarget for TextNode {
    fn set_text_content(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_target_is_noop() {
        assign_text_safely::<TextNode>(None, "x");
    }

    #[test]
    fn sets_literal_text() {
        let mut node = TextNode::new();
        assign_text_safely(Some(&mut node), "<b>bold</b>");
        assert_eq!(node.text(), "<b>bold</b>");
    }

    #[test]
    fn replaces_previous_text() {
        let mut node = TextNode::new();
        assign_text_safely(Some(&mut node), "first");
        assign_text_safely(Some(&mut node), "second");
        assert_eq!(node.text(), "second");
    }

    #[test]
    fn works_through_trait_object() {
        let mut node = TextNode::new();
        let target: &mut dyn TextTarget = &mut node;
        assign_text_safely(Some(target), "dyn");
        assert_eq!(node.text(), "dyn");
    }
}
