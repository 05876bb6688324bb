//! Backend-independent description of what the counter view shows.
//!
//! `App::render` builds a [`ViewNode`] tree from state; the ratatui layer
//! in `render.rs` paints it, and tests query it by tag the same way a DOM
//! test queries `data-test` attributes.

use crate::ui::counter::CounterIntent;

/// Tag of the root container.
pub const COMPONENT_APP: &str = "component-app";
/// Tag of the node showing the counter value.
pub const COUNTER_DISPLAY: &str = "counter-display";
/// Tag of the node that increments the counter when activated.
pub const INCREMENT_BUTTON: &str = "increment-button";

pub const INCREMENT_LABEL: &str = "Increment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    Heading,
    Button,
}

/// Action bound to an activatable node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Counter(CounterIntent),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub kind: NodeKind,
    pub tag: Option<&'static str>,
    pub text: String,
    pub action: Option<Action>,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn container(tag: &'static str, children: Vec<ViewNode>) -> Self {
        Self {
            kind: NodeKind::Container,
            tag: Some(tag),
            text: String::new(),
            action: None,
            children,
        }
    }

    pub fn heading(tag: &'static str, text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Heading,
            tag: Some(tag),
            text: text.into(),
            action: None,
            children: Vec::new(),
        }
    }

    pub fn button(tag: &'static str, label: impl Into<String>, action: Action) -> Self {
        Self {
            kind: NodeKind::Button,
            tag: Some(tag),
            text: label.into(),
            action: Some(action),
            children: Vec::new(),
        }
    }

    /// All nodes in this subtree (self included) carrying `tag`, in
    /// depth-first order.
    pub fn find_by_tag(&self, tag: &str) -> Vec<&ViewNode> {
        let mut found = Vec::new();
        self.collect_by_tag(tag, &mut found);
        found
    }

    /// The single node carrying `tag`, or `None` if there are zero or several.
    pub fn find_one(&self, tag: &str) -> Option<&ViewNode> {
        let found = self.find_by_tag(tag);
        match found.as_slice() {
            [node] => Some(*node),
            _ => None,
        }
    }

    fn collect_by_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a ViewNode>) {
        if self.tag == Some(tag) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_by_tag(tag, found);
        }
    }
}
