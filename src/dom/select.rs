use web_sys::{Document, Element, Node};

use super::{DomError, Result, collection_elements, document, node_list_elements, ok_or_log};

/// First element matching `selector`.
pub fn query(selector: &str, doc: Option<&Document>) -> Result<Option<Element>> {
    document(doc)?
        .query_selector(selector)
        .map_err(|_| DomError::Selector(selector.to_string()))
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str, doc: Option<&Document>) -> Result<Vec<Element>> {
    let list = document(doc)?
        .query_selector_all(selector)
        .map_err(|_| DomError::Selector(selector.to_string()))?;
    Ok(node_list_elements(&list))
}

/// First descendant of `root` matching `selector`.
pub fn query_in(root: &Element, selector: &str) -> Result<Option<Element>> {
    root.query_selector(selector)
        .map_err(|_| DomError::Selector(selector.to_string()))
}

pub fn by_id(id: &str, doc: Option<&Document>) -> Option<Element> {
    ok_or_log(document(doc), "by_id")?.get_element_by_id(id)
}

/// Nearest inclusive ancestor matching `selector`.
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

pub fn parent(el: &Element) -> Option<Element> {
    el.parent_element()
}

pub fn children(el: &Element) -> Vec<Element> {
    collection_elements(&el.children())
}

/// Element children of the parent, excluding `el` itself.
pub fn siblings(el: &Element) -> Vec<Element> {
    let Some(parent) = el.parent_element() else {
        return Vec::new();
    };
    let this: &Node = el;
    children(&parent)
        .into_iter()
        .filter(|sibling| !sibling.is_same_node(Some(this)))
        .collect()
}
