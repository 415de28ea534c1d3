use crate::models::{Element, ElementId, Selector};
use crate::utils::error::{Result, UiError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Arena holding every element ever created, attached or not
struct DocumentTree {
    nodes: HashMap<ElementId, Element>,
    body: ElementId,
    next_id: u64,
}

impl DocumentTree {
    fn new() -> Self {
        let body = ElementId(0);
        let mut nodes = HashMap::new();
        nodes.insert(body, Element::new("body"));

        Self {
            nodes,
            body,
            next_id: 1,
        }
    }

    fn get(&self, id: ElementId) -> Result<&Element> {
        self.nodes.get(&id).ok_or(UiError::ElementNotFound(id))
    }

    fn get_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.nodes.get_mut(&id).ok_or(UiError::ElementNotFound(id))
    }

    fn create(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Element::new(tag));
        id
    }

    /// Walks the parent chain up to the body
    fn is_attached(&self, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == self.body {
                return true;
            }
            current = self.nodes.get(&node).and_then(|el| el.parent);
        }
        false
    }

    fn is_inclusive_ancestor(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|el| el.parent);
        }
        false
    }

    fn detach(&mut self, id: ElementId) -> Result<bool> {
        let parent = self.get_mut(id)?.parent.take();
        match parent {
            Some(parent) => {
                if let Some(parent_el) = self.nodes.get_mut(&parent) {
                    parent_el.children.retain(|child| *child != id);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn insert(&mut self, parent: ElementId, child: ElementId, index: Option<usize>) -> Result<()> {
        self.get(parent)?;
        self.get(child)?;

        if child == self.body {
            return Err(UiError::HierarchyRequest("the body cannot be moved".to_string()));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(UiError::HierarchyRequest(format!(
                "{} contains {}",
                child, parent
            )));
        }

        // Moving an attached element detaches it first, like the DOM does
        self.detach(child)?;

        let parent_el = self.get_mut(parent)?;
        match index {
            Some(i) => parent_el.children.insert(i.min(parent_el.children.len()), child),
            None => parent_el.children.push(child),
        }
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Attached descendants of the body in document order
    fn attached_in_order(&self) -> Vec<ElementId> {
        let mut order = Vec::new();
        let mut stack = vec![self.body];

        while let Some(id) = stack.pop() {
            if let Some(el) = self.nodes.get(&id) {
                if id != self.body {
                    order.push(id);
                }
                stack.extend(el.children.iter().rev());
            }
        }

        order
    }

    fn text_content(&self, id: ElementId, out: &mut String) {
        if let Some(el) = self.nodes.get(&id) {
            out.push_str(&el.text);
            for child in &el.children {
                self.text_content(*child, out);
            }
        }
    }

    fn render(&self, id: ElementId, out: &mut String) {
        let Some(el) = self.nodes.get(&id) else {
            return;
        };

        out.push('<');
        out.push_str(&el.tag);
        if let Some(ref element_id) = el.id {
            out.push_str(&format!(" id=\"{}\"", escape_html(element_id)));
        }
        if !el.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape_html(&el.class_name())));
        }
        out.push('>');
        out.push_str(&escape_html(&el.text));
        for child in &el.children {
            self.render(*child, out);
        }
        out.push_str(&format!("</{}>", el.tag));
    }
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Headless document the UI helpers render into.
///
/// Cloning yields another handle to the same tree. Elements are never
/// freed; a removed element can be inserted again later.
#[derive(Clone)]
pub struct Document {
    tree: Arc<RwLock<DocumentTree>>,
}

impl Document {
    /// Create an empty document containing only a body
    pub fn new() -> Self {
        Self {
            tree: Arc::new(RwLock::new(DocumentTree::new())),
        }
    }

    /// Root element
    pub async fn body(&self) -> ElementId {
        self.tree.read().await.body
    }

    /// Create a detached element
    pub async fn create_element(&self, tag: &str) -> ElementId {
        self.tree.write().await.create(tag)
    }

    pub async fn set_id(&self, id: ElementId, value: &str) -> Result<()> {
        self.tree.write().await.get_mut(id)?.id = Some(value.to_string());
        Ok(())
    }

    pub async fn set_class_name(&self, id: ElementId, class_name: &str) -> Result<()> {
        self.tree.write().await.get_mut(id)?.set_class_name(class_name);
        Ok(())
    }

    /// Set the element's own text. Children are kept.
    pub async fn set_text(&self, id: ElementId, text: &str) -> Result<()> {
        self.tree.write().await.get_mut(id)?.text = text.to_string();
        Ok(())
    }

    /// Append `child` as the last child of `parent`
    pub async fn append_child(&self, parent: ElementId, child: ElementId) -> Result<()> {
        self.tree.write().await.insert(parent, child, None)
    }

    /// Insert `child` before the current first child of `parent`
    pub async fn insert_first_child(&self, parent: ElementId, child: ElementId) -> Result<()> {
        self.tree.write().await.insert(parent, child, Some(0))
    }

    /// Detach an element from its parent.
    ///
    /// Returns `false` when it was already detached.
    pub async fn remove(&self, id: ElementId) -> Result<bool> {
        self.tree.write().await.detach(id)
    }

    pub async fn is_attached(&self, id: ElementId) -> bool {
        self.tree.read().await.is_attached(id)
    }

    /// Snapshot of an element
    pub async fn element(&self, id: ElementId) -> Result<Element> {
        self.tree.read().await.get(id).cloned()
    }

    /// First attached element whose `id` attribute equals `value`
    pub async fn get_element_by_id(&self, value: &str) -> Option<ElementId> {
        self.find_first(&Selector::Id(value.to_string())).await
    }

    /// First attached element matching `selector`
    pub async fn query_selector(&self, selector: &str) -> Result<Option<ElementId>> {
        let selector: Selector = selector.parse()?;
        Ok(self.find_first(&selector).await)
    }

    /// Every attached element matching `selector`, in document order
    pub async fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementId>> {
        let selector: Selector = selector.parse()?;
        let tree = self.tree.read().await;

        Ok(tree
            .attached_in_order()
            .into_iter()
            .filter(|id| tree.nodes.get(id).is_some_and(|el| selector.matches(el)))
            .collect())
    }

    async fn find_first(&self, selector: &Selector) -> Option<ElementId> {
        let tree = self.tree.read().await;
        tree.attached_in_order()
            .into_iter()
            .find(|id| tree.nodes.get(id).is_some_and(|el| selector.matches(el)))
    }

    /// Concatenated text of the element and its descendants
    pub async fn text_content(&self, id: ElementId) -> Result<String> {
        let tree = self.tree.read().await;
        tree.get(id)?;

        let mut text = String::new();
        tree.text_content(id, &mut text);
        Ok(text)
    }

    /// Render an element subtree as HTML
    pub async fn to_html(&self, id: ElementId) -> Result<String> {
        let tree = self.tree.read().await;
        tree.get(id)?;

        let mut html = String::new();
        tree.render(id, &mut html);
        Ok(html)
    }

    /// Render the whole attached document
    pub async fn render(&self) -> String {
        let tree = self.tree.read().await;
        let mut html = String::new();
        tree.render(tree.body, &mut html);
        html
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
