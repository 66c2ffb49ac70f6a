use std::sync::atomic::{AtomicU64, Ordering};

use super::{find_element, find_element_mut, Content};
use crate::types::{Edges, Size, StyleMap, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Presentation
    pub classes: Vec<String>,
    pub style: StyleMap,

    // Box model (fixed sizes are outer, border-box sizes)
    pub width: Size,
    pub height: Size,
    pub padding: Edges,

    // Table cells
    pub colspan: u16,
    pub rowspan: u16,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            content: Content::None,
            classes: Vec::new(),
            style: StyleMap::new(),
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            colspan: 1,
            rowspan: 1,
        }
    }
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.name()),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::new(Tag::THead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::TBody)
    }

    pub fn tfoot() -> Self {
        Self::new(Tag::TFoot)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    pub fn th(text: impl Into<String>) -> Self {
        Self::new(Tag::Th).text(text)
    }

    pub fn td(text: impl Into<String>) -> Self {
        Self::new(Tag::Td).text(text)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    // Presentation
    pub fn class(mut self, classes: &str) -> Self {
        self.add_class(classes);
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    // Box model
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn colspan(mut self, colspan: u16) -> Self {
        self.colspan = colspan.max(1);
        self
    }

    pub fn rowspan(mut self, rowspan: u16) -> Self {
        self.rowspan = rowspan.max(1);
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.append(child);
        self
    }

    pub fn with_children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.append(child);
        }
        self
    }

    /// Append a child, replacing any text content.
    pub fn append(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Remove every child and return them.
    pub fn take_children(&mut self) -> Vec<Element> {
        match std::mem::take(&mut self.content) {
            Content::Children(children) => children,
            other => {
                self.content = other;
                Vec::new()
            }
        }
    }

    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Mutable access to the child list, converting non-child content to an empty list.
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        if !matches!(self.content, Content::Children(_)) {
            self.content = Content::Children(Vec::new());
        }
        match &mut self.content {
            Content::Children(children) => children,
            _ => unreachable!("content was just set to children"),
        }
    }

    // Classes

    /// Add one or more space-separated classes, skipping ones already present.
    pub fn add_class(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Lookup
    pub fn find(&self, id: &str) -> Option<&Element> {
        find_element(self, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(self, id)
    }

    /// Structural copy of this subtree where every element gets a fresh ID.
    pub fn deep_clone(&self) -> Element {
        let mut copy = self.shallow_clone();
        for child in self.children() {
            copy.append(child.deep_clone());
        }
        copy
    }

    /// Copy of this element alone, with a fresh ID and no children.
    /// Text content is kept.
    pub fn shallow_clone(&self) -> Element {
        let content = match &self.content {
            Content::Text(text) => Content::Text(text.clone()),
            _ => Content::None,
        };
        Element {
            id: generate_id(self.tag.name()),
            tag: self.tag,
            content,
            classes: self.classes.clone(),
            style: self.style.clone(),
            width: self.width,
            height: self.height,
            padding: self.padding,
            colspan: self.colspan,
            rowspan: self.rowspan,
        }
    }
}
