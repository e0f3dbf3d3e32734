use web_sys::Element;

use super::Result;

/// Splits a class list on whitespace, skipping empty entries.
pub fn class_names(classes: &str) -> impl Iterator<Item = &str> {
    classes.split_whitespace()
}

pub fn add_class(el: &Element, classes: &str) -> Result<()> {
    let list = el.class_list();
    for name in class_names(classes) {
        list.add_1(name)?;
    }
    Ok(())
}

pub fn remove_class(el: &Element, classes: &str) -> Result<()> {
    let list = el.class_list();
    for name in class_names(classes) {
        list.remove_1(name)?;
    }
    Ok(())
}

/// Toggles each class, or forces it on/off when `force` is given.
pub fn toggle_class(el: &Element, classes: &str, force: Option<bool>) -> Result<()> {
    let list = el.class_list();
    for name in class_names(classes) {
        match force {
            Some(force) => list.toggle_with_force(name, force)?,
            None => list.toggle(name)?,
        };
    }
    Ok(())
}

/// True when every listed class is present. An empty list is never present.
pub fn has_class(el: &Element, classes: &str) -> bool {
    let list = el.class_list();
    let mut names = class_names(classes).peekable();
    names.peek().is_some() && names.all(|name| list.contains(name))
}

/// Replaces `old` with `new`; false when `old` was not present.
pub fn replace_class(el: &Element, old: &str, new: &str) -> Result<bool> {
    Ok(el.class_list().replace(old, new)?)
}
