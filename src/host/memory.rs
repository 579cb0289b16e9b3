//! In-memory document host.
//!
//! A deterministic, layout-free document model for tests and the demo
//! binary: a tree of elements with tags, ids, class lists, inline styles,
//! attributes, and fixed document-space rectangles. The selector engine
//! covers the subset the engine actually uses (`tag`, `.class`, `#id`,
//! comma lists, and `.class > *`).

use rustc_hash::{FxHashMap, FxHashSet};

use super::{Capabilities, DocumentHost, ElementRect, NodeId};

#[derive(Debug)]
struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    styles: FxHashMap<String, String>,
    attributes: FxHashMap<String, String>,
    text: String,
    rect: ElementRect,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attached: bool,
}

impl Element {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_owned(),
            id: None,
            classes: Vec::new(),
            styles: FxHashMap::default(),
            attributes: FxHashMap::default(),
            text: String::new(),
            rect: ElementRect::default(),
            parent,
            children: Vec::new(),
            attached: true,
        }
    }
}

/// One simple selector component.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Simple {
    Universal,
    Tag(String),
    Class(String),
    Id(String),
}

impl Simple {
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        if s == "*" {
            return Some(Self::Universal);
        }
        if let Some(class) = s.strip_prefix('.') {
            return Some(Self::Class(class.to_owned()));
        }
        if let Some(id) = s.strip_prefix('#') {
            return Some(Self::Id(id.to_owned()));
        }
        Some(Self::Tag(s.to_ascii_lowercase()))
    }

    fn matches(&self, elem: &Element) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => elem.tag.eq_ignore_ascii_case(tag),
            Self::Class(class) => elem.classes.iter().any(|c| c == class),
            Self::Id(id) => elem.id.as_deref() == Some(id),
        }
    }
}

/// A parsed selector: either one simple component or a `parent > child`
/// pair of simple components.
#[derive(Debug, Clone)]
enum Selector {
    Simple(Simple),
    Child { parent: Simple, child: Simple },
}

impl Selector {
    fn parse(s: &str) -> Option<Self> {
        match s.split_once('>') {
            Some((parent, child)) => Some(Self::Child {
                parent: Simple::parse(parent)?,
                child: Simple::parse(child)?,
            }),
            None => Simple::parse(s).map(Self::Simple),
        }
    }

    fn parse_list(s: &str) -> Vec<Self> {
        s.split(',').filter_map(Self::parse).collect()
    }
}

/// Deterministic in-memory [`DocumentHost`] implementation.
///
/// Vibration pulses are recorded rather than actuated so tests can assert
/// on haptic behavior.
pub struct MemoryDocument {
    nodes: Vec<Element>,
    body: NodeId,
    scroll_y: f32,
    viewport_height: f32,
    caps: Capabilities,
    root_properties: FxHashMap<String, String>,
    vibrations: Vec<u32>,
}

impl MemoryDocument {
    /// Create a document holding only a `body` element.
    #[must_use]
    pub fn new(viewport_height: f32) -> Self {
        Self {
            nodes: vec![Element::new("body", None)],
            body: NodeId(0),
            scroll_y: 0.0,
            viewport_height,
            caps: Capabilities::default(),
            root_properties: FxHashMap::default(),
            vibrations: Vec::new(),
        }
    }

    /// Builder-style capability override.
    #[must_use]
    pub fn with_capabilities(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    /// Insert a child element under `parent`.
    pub fn insert(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = NodeId(self.nodes.len() as u32);
        self.nodes.push(Element::new(tag, Some(parent)));
        if let Some(p) = self.elem_mut(parent) {
            p.children.push(node);
        }
        node
    }

    /// Insert a child element with classes and a document-space rect.
    pub fn insert_with(
        &mut self,
        parent: NodeId,
        tag: &str,
        classes: &[&str],
        rect: ElementRect,
    ) -> NodeId {
        let node = self.insert(parent, tag);
        if let Some(e) = self.elem_mut(node) {
            e.classes = classes.iter().map(|&c| c.to_owned()).collect();
            e.rect = rect;
        }
        node
    }

    /// Set an element's `id`.
    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(e) = self.elem_mut(node) {
            e.id = Some(id.to_owned());
        }
    }

    /// Set an element's document-space rect.
    pub fn set_rect(&mut self, node: NodeId, rect: ElementRect) {
        if let Some(e) = self.elem_mut(node) {
            e.rect = rect;
        }
    }

    /// Resize the viewport, e.g. to simulate a device rotation.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    /// Inline style property value, if set.
    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.elem(node)
            .and_then(|e| e.styles.get(property))
            .map(String::as_str)
    }

    /// Element class list.
    #[must_use]
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.elem(node).map_or(&[], |e| &e.classes)
    }

    /// Element text content.
    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        self.elem(node).map_or("", |e| &e.text)
    }

    /// Child handles in insertion order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.elem(node).map_or(&[], |e| &e.children)
    }

    /// Root custom property value, if set.
    #[must_use]
    pub fn root_property(&self, name: &str) -> Option<&str> {
        self.root_properties.get(name).map(String::as_str)
    }

    /// Recorded vibration pulses, oldest first.
    #[must_use]
    pub fn vibrations(&self) -> &[u32] {
        &self.vibrations
    }

    fn elem(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0 as usize).filter(|e| e.attached)
    }

    fn elem_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0 as usize).filter(|e| e.attached)
    }

    /// Depth-first preorder walk from `root`, excluding `root` itself.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .elem(root)
            .map_or_else(Vec::new, |e| e.children.iter().rev().copied().collect());
        while let Some(node) = stack.pop() {
            if self.elem(node).is_none() {
                continue;
            }
            out.push(node);
            if let Some(e) = self.elem(node) {
                stack.extend(e.children.iter().rev().copied());
            }
        }
        out
    }

    fn matches_any(&self, node: NodeId, selectors: &[Selector]) -> bool {
        let Some(elem) = self.elem(node) else {
            return false;
        };
        selectors.iter().any(|sel| match sel {
            Selector::Simple(simple) => simple.matches(elem),
            Selector::Child { parent, child } => {
                child.matches(elem)
                    && elem
                        .parent
                        .and_then(|p| self.elem(p))
                        .is_some_and(|p| parent.matches(p))
            }
        })
    }

    fn query_among(&self, candidates: &[NodeId], selector: &str) -> Vec<NodeId> {
        let selectors = Selector::parse_list(selector);
        if selectors.is_empty() {
            return Vec::new();
        }
        let mut seen = FxHashSet::default();
        candidates
            .iter()
            .copied()
            .filter(|&n| self.matches_any(n, &selectors) && seen.insert(n))
            .collect()
    }

    fn self_and_descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut all = vec![root];
        all.extend(self.descendants(root));
        all
    }
}

impl DocumentHost for MemoryDocument {
    fn query(&self, selector: &str) -> Vec<NodeId> {
        self.query_among(&self.self_and_descendants(self.body), selector)
    }

    fn query_within(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        self.query_among(&self.descendants(root), selector)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.elem(node)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        if let Some(e) = self.elem_mut(node) {
            e.classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(e) = self.elem_mut(node) {
            e.classes.retain(|c| c != class);
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(e) = self.elem_mut(node) {
            let _ = e.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn clear_style(&mut self, node: NodeId, property: &str) {
        if let Some(e) = self.elem_mut(node) {
            let _ = e.styles.remove(property);
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.elem(node).and_then(|e| e.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(e) = self.elem_mut(node) {
            let _ = e.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    fn append_child(
        &mut self,
        parent: NodeId,
        tag: &str,
        class: &str,
        text: &str,
    ) -> NodeId {
        let node = self.insert(parent, tag);
        if let Some(e) = self.elem_mut(node) {
            if !class.is_empty() {
                e.classes.push(class.to_owned());
            }
            e.text = text.to_owned();
        }
        node
    }

    fn remove_node(&mut self, node: NodeId) {
        let subtree = self.self_and_descendants(node);
        let parent = self.elem(node).and_then(|e| e.parent);
        for n in subtree {
            if let Some(e) = self.nodes.get_mut(n.0 as usize) {
                e.attached = false;
            }
        }
        if let Some(p) = parent.and_then(|p| self.elem_mut(p)) {
            p.children.retain(|&c| c != node);
        }
    }

    fn contains(&self, node: NodeId) -> bool {
        self.elem(node).is_some()
    }

    fn rect(&self, node: NodeId) -> ElementRect {
        self.elem(node).map_or_else(ElementRect::default, |e| e.rect)
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    fn set_scroll_y(&mut self, y: f32) {
        self.scroll_y = y.max(0.0);
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn set_root_property(&mut self, name: &str, value: &str) {
        let _ = self
            .root_properties
            .insert(name.to_owned(), value.to_owned());
    }

    fn vibrate(&mut self, duration_ms: u32) {
        if self.caps.vibration {
            self.vibrations.push(duration_ms);
        }
    }

    fn capabilities(&self) -> Capabilities {
        self.caps
    }
}
