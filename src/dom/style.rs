use std::borrow::Cow;

use web_sys::Element;

use super::{Result, as_html, ok_or_log, window};

/// CSS property name for a camelCase or kebab-case key.
///
/// `backgroundColor` becomes `background-color`, `WebkitTransform` becomes
/// `-webkit-transform`; custom properties and kebab-case names pass through.
pub fn css_property_name(name: &str) -> Cow<'_, str> {
    if name.starts_with("--") || !name.chars().any(|c| c.is_ascii_uppercase()) {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len() + 4);
    if name.starts_with("ms") {
        out.push('-');
    }
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

pub fn set_style(el: &Element, property: &str, value: &str) -> Result<()> {
    as_html(el)?
        .style()
        .set_property(&css_property_name(property), value)?;
    Ok(())
}

pub fn set_styles<'a, I>(el: &Element, styles: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let style = as_html(el)?.style();
    for (property, value) in styles {
        style.set_property(&css_property_name(property), value)?;
    }
    Ok(())
}

/// Computed value of `property`; `None` when unset or unavailable.
pub fn get_style(el: &Element, property: &str) -> Option<String> {
    let computed = ok_or_log(window(), "get_style")?
        .get_computed_style(el)
        .ok()
        .flatten()?;
    computed
        .get_property_value(&css_property_name(property))
        .ok()
        .filter(|value| !value.is_empty())
}

pub fn is_hidden(el: &Element) -> bool {
    get_style(el, "display").as_deref() == Some("none")
}

/// Clears an inline `display: none`, falling back to `block` when a
/// stylesheet still hides the element.
pub fn show(el: &Element) -> Result<()> {
    let style = as_html(el)?.style();
    style.remove_property("display")?;
    if is_hidden(el) {
        style.set_property("display", "block")?;
    }
    Ok(())
}

pub fn hide(el: &Element) -> Result<()> {
    as_html(el)?.style().set_property("display", "none")?;
    Ok(())
}

/// Shows a hidden element or hides a visible one. Returns the new visibility.
pub fn toggle_display(el: &Element) -> Result<bool> {
    if is_hidden(el) {
        show(el)?;
        Ok(true)
    } else {
        hide(el)?;
        Ok(false)
    }
}
