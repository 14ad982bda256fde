//! In-memory document.

use super::document::{Document, ElementId};
use crate::base::snaperror::SnapError;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use url::Url;

#[derive(Debug)]
struct Node {
    tag: String,
    text: String,
    value: String,
    styles: BTreeMap<String, String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    selected: bool,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: String::new(),
            value: String::new(),
            styles: BTreeMap::new(),
            parent: None,
            children: Vec::new(),
            selected: false,
        }
    }
}

#[derive(Debug, Default)]
struct Tree {
    next_id: u64,
    nodes: HashMap<ElementId, Node>,
    body: Vec<ElementId>,
    mutations: u64,
}

impl Tree {
    fn node_mut(&mut self, id: ElementId) -> Result<&mut Node, SnapError> {
        self.nodes.get_mut(&id).ok_or(SnapError::NoSuchElement(id.as_u64()))
    }

    fn detach(&mut self, id: ElementId) {
        let parent = self.nodes.get_mut(&id).and_then(|n| n.parent.take());
        match parent {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(&parent) {
                    p.children.retain(|c| *c != id);
                }
            }
            None => self.body.retain(|c| *c != id),
        }
    }

    fn drop_subtree(&mut self, id: ElementId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                stack.extend(node.children);
            }
        }
    }

    fn is_ancestor(&self, ancestor: ElementId, mut id: ElementId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.nodes.get(&id).and_then(|n| n.parent) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }
}

/// A headless [`Document`] backed by an in-memory element tree.
///
/// Counts every successful mutation so callers can check that nothing touched
/// the tree after a teardown.
#[derive(Debug)]
pub struct MemoryDocument {
    location: Url,
    cookie: Mutex<String>,
    tree: Mutex<Tree>,
}

impl MemoryDocument {
    pub fn new(location: Url, cookie: impl Into<String>) -> Self {
        Self {
            location,
            cookie: Mutex::new(cookie.into()),
            tree: Mutex::new(Tree::default()),
        }
    }

    /// Parse `location` and build a document for it.
    pub fn for_url(location: &str, cookie: impl Into<String>) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(location)?, cookie))
    }

    pub fn set_cookie(&self, cookie: impl Into<String>) {
        *self.cookie.lock() = cookie.into();
    }

    /// Number of live elements, attached or not.
    pub fn element_count(&self) -> usize {
        self.tree.lock().nodes.len()
    }

    /// Direct children of the body, in insertion order.
    pub fn body_children(&self) -> Vec<ElementId> {
        self.tree.lock().body.clone()
    }

    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.tree
            .lock()
            .nodes
            .get(&id)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    pub fn tag(&self, id: ElementId) -> Option<String> {
        self.tree.lock().nodes.get(&id).map(|n| n.tag.clone())
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.tree.lock().nodes.get(&id).is_some_and(|n| n.selected)
    }

    /// Total successful mutations since creation.
    pub fn mutation_count(&self) -> u64 {
        self.tree.lock().mutations
    }
}

impl Document for MemoryDocument {
    fn cookie(&self) -> String {
        self.cookie.lock().clone()
    }

    fn location(&self) -> Url {
        self.location.clone()
    }

    fn create_element(&self, tag: &str) -> ElementId {
        let mut tree = self.tree.lock();
        tree.next_id += 1;
        let id = ElementId::new(tree.next_id);
        tree.nodes.insert(id, Node::new(tag));
        id
    }

    fn set_text(&self, id: ElementId, text: &str) -> Result<(), SnapError> {
        let mut tree = self.tree.lock();
        tree.node_mut(id)?.text = text.to_string();
        tree.mutations += 1;
        Ok(())
    }

    fn text(&self, id: ElementId) -> Option<String> {
        self.tree.lock().nodes.get(&id).map(|n| n.text.clone())
    }

    fn set_value(&self, id: ElementId, value: &str) -> Result<(), SnapError> {
        let mut tree = self.tree.lock();
        let node = tree.node_mut(id)?;
        node.value = value.to_string();
        node.selected = false;
        tree.mutations += 1;
        Ok(())
    }

    fn value(&self, id: ElementId) -> Option<String> {
        self.tree.lock().nodes.get(&id).map(|n| n.value.clone())
    }

    fn set_style(&self, id: ElementId, property: &str, value: &str) -> Result<(), SnapError> {
        let mut tree = self.tree.lock();
        tree.node_mut(id)?
            .styles
            .insert(property.to_string(), value.to_string());
        tree.mutations += 1;
        Ok(())
    }

    fn style(&self, id: ElementId, property: &str) -> Option<String> {
        self.tree
            .lock()
            .nodes
            .get(&id)
            .and_then(|n| n.styles.get(property).cloned())
    }

    fn append_child(&self, parent: ElementId, child: ElementId) -> Result<(), SnapError> {
        let mut tree = self.tree.lock();
        tree.node_mut(parent)?;
        tree.node_mut(child)?;
        // A node cannot become a child of itself or of its own descendant.
        if tree.is_ancestor(child, parent) {
            return Err(SnapError::HierarchyRequest {
                parent: parent.as_u64(),
                child: child.as_u64(),
            });
        }
        tree.detach(child);
        tree.node_mut(child)?.parent = Some(parent);
        tree.node_mut(parent)?.children.push(child);
        tree.mutations += 1;
        Ok(())
    }

    fn mount(&self, id: ElementId) -> Result<(), SnapError> {
        let mut tree = self.tree.lock();
        tree.node_mut(id)?;
        tree.detach(id);
        tree.body.push(id);
        tree.mutations += 1;
        Ok(())
    }

    fn remove(&self, id: ElementId) -> bool {
        let mut tree = self.tree.lock();
        if !tree.nodes.contains_key(&id) {
            return false;
        }
        tree.detach(id);
        tree.drop_subtree(id);
        tree.mutations += 1;
        true
    }

    fn is_attached(&self, id: ElementId) -> bool {
        let tree = self.tree.lock();
        let mut current = id;
        loop {
            match tree.nodes.get(&current) {
                None => return false,
                Some(node) => match node.parent {
                    Some(parent) => current = parent,
                    None => return tree.body.contains(&current),
                },
            }
        }
    }

    fn select(&self, id: ElementId) -> Result<(), SnapError> {
        let mut tree = self.tree.lock();
        tree.node_mut(id)?.selected = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> MemoryDocument {
        MemoryDocument::for_url("https://example.com/", "a=1").unwrap()
    }

    #[test]
    fn test_mount_and_remove_subtree() {
        let doc = doc();
        let outer = doc.create_element("div");
        let inner = doc.create_element("span");
        doc.append_child(outer, inner).unwrap();
        doc.mount(outer).unwrap();

        assert!(doc.is_attached(inner));
        assert_eq!(doc.body_children(), vec![outer]);

        assert!(doc.remove(outer));
        assert_eq!(doc.element_count(), 0);
        assert!(doc.body_children().is_empty());
        assert!(!doc.remove(outer));
    }

    #[test]
    fn test_detached_element_is_not_attached() {
        let doc = doc();
        let el = doc.create_element("div");
        assert!(!doc.is_attached(el));
        doc.mount(el).unwrap();
        assert!(doc.is_attached(el));
    }

    #[test]
    fn test_mutating_removed_element_fails() {
        let doc = doc();
        let el = doc.create_element("button");
        doc.remove(el);
        assert_eq!(doc.set_text(el, "x"), Err(SnapError::NoSuchElement(el.as_u64())));
        assert_eq!(doc.text(el), None);
    }

    #[test]
    fn test_append_child_rejects_cycle() {
        let doc = doc();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        doc.append_child(a, b).unwrap();
        assert!(matches!(doc.append_child(b, a), Err(SnapError::HierarchyRequest { .. })));
        assert!(doc.append_child(a, a).is_err());
    }

    #[test]
    fn test_reparenting_moves_child() {
        let doc = doc();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let c = doc.create_element("span");
        doc.append_child(a, c).unwrap();
        doc.append_child(b, c).unwrap();
        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), vec![c]);
    }

    #[test]
    fn test_mutation_counter_ignores_reads_and_failures() {
        let doc = doc();
        let el = doc.create_element("div");
        let before = doc.mutation_count();
        doc.set_text(el, "hi").unwrap();
        let _ = doc.text(el);
        let _ = doc.set_text(ElementId::new(999), "nope");
        assert_eq!(doc.mutation_count(), before + 1);
    }

    #[test]
    fn test_cookie_and_location() {
        let doc = doc();
        assert_eq!(doc.cookie(), "a=1");
        doc.set_cookie("b=2");
        assert_eq!(doc.cookie(), "b=2");
        assert_eq!(doc.location().host_str(), Some("example.com"));
    }
}
