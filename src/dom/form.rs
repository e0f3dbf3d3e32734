//! Form serialization.
//!
//! Controls are collected in document order. Disabled or unnamed controls,
//! unchecked checkboxes and radios, and button/file inputs are skipped, as a
//! browser form submission would.

use serde_json::{Map, Value};
use url::form_urlencoded;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlFormElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, HtmlTextAreaElement,
};

use super::{collection_elements, node_list_elements};

const SKIPPED_INPUTS: [&str; 5] = ["button", "file", "image", "reset", "submit"];

/// Successful controls as `(name, value)` pairs.
pub fn serialize_form(form: &HtmlFormElement) -> Vec<(String, String)> {
    let Ok(controls) = form.query_selector_all("input, select, textarea") else {
        return Vec::new();
    };

    let mut pairs = Vec::new();
    for el in node_list_elements(&controls) {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            let kind = input.type_();
            let unchecked = matches!(kind.as_str(), "checkbox" | "radio") && !input.checked();
            if input.disabled() || input.name().is_empty() || unchecked {
                continue;
            }
            if SKIPPED_INPUTS.contains(&kind.as_str()) {
                continue;
            }
            pairs.push((input.name(), input.value()));
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            if !select.disabled() && !select.name().is_empty() {
                push_values(&mut pairs, &select.name(), selected_values(select));
            }
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            if !area.disabled() && !area.name().is_empty() {
                pairs.push((area.name(), area.value()));
            }
        }
    }
    pairs
}

/// Values of every selected option, so a `<select multiple>` contributes one
/// entry per selection.
fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    collection_elements(&select.selected_options())
        .iter()
        .filter_map(|el| el.dyn_ref::<HtmlOptionElement>())
        .filter(|option| !option.disabled())
        .map(HtmlOptionElement::value)
        .collect()
}

fn push_values(pairs: &mut Vec<(String, String)>, name: &str, values: Vec<String>) {
    pairs.extend(values.into_iter().map(|value| (name.to_string(), value)));
}

/// `application/x-www-form-urlencoded` body for the pairs.
pub fn to_query_string(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Groups pairs by name. A name seen once maps to a string, a repeated name
/// to an array of strings in order.
pub fn collect_values(pairs: &[(String, String)]) -> Map<String, Value> {
    let mut values = Map::new();
    for (name, value) in pairs {
        let value = Value::String(value.clone());
        match values.get_mut(name) {
            None => {
                values.insert(name.clone(), value);
            }
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
        }
    }
    values
}

pub fn form_values(form: &HtmlFormElement) -> Map<String, Value> {
    collect_values(&serialize_form(form))
}

pub fn reset_form(form: &HtmlFormElement) {
    form.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_to_query_string() {
        let body = to_query_string(&pairs(&[("name", "张三"), ("q", "a b&c")]));
        assert_eq!(body, "name=%E5%BC%A0%E4%B8%89&q=a+b%26c");
        assert_eq!(to_query_string(&[]), "");
    }

    #[test]
    fn test_collect_values_groups_repeated_names() {
        let values = collect_values(&pairs(&[
            ("user", "alice"),
            ("tag", "a"),
            ("tag", "b"),
            ("tag", "c"),
        ]));
        assert_eq!(values["user"], json!("alice"));
        assert_eq!(values["tag"], json!(["a", "b", "c"]));
    }

    #[test]
    fn test_multi_select_values_repeat_the_name() {
        let mut collected = pairs(&[("user", "alice")]);
        push_values(&mut collected, "tag", vec!["a".to_string(), "c".to_string()]);
        push_values(&mut collected, "none", Vec::new());

        assert_eq!(collected, pairs(&[("user", "alice"), ("tag", "a"), ("tag", "c")]));
        assert_eq!(to_query_string(&collected), "user=alice&tag=a&tag=c");
        assert_eq!(collect_values(&collected)["tag"], json!(["a", "c"]));
    }
}
