use web_sys::Element;

use super::Result;

pub fn get_attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(name)
}

pub fn set_attr(el: &Element, name: &str, value: &str) -> Result<()> {
    el.set_attribute(name, value)?;
    Ok(())
}

pub fn set_attrs<'a, I>(el: &Element, attrs: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (name, value) in attrs {
        el.set_attribute(name, value)?;
    }
    Ok(())
}

pub fn remove_attr(el: &Element, name: &str) -> Result<()> {
    el.remove_attribute(name)?;
    Ok(())
}

pub fn has_attr(el: &Element, name: &str) -> bool {
    el.has_attribute(name)
}

/// `data-*` attribute for a dataset key: `userId` and `user-id` both map to
/// `data-user-id`.
pub fn data_attribute_name(key: &str) -> String {
    if key.starts_with("data-") {
        return key.to_string();
    }
    let mut out = String::from("data-");
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn get_data(el: &Element, key: &str) -> Option<String> {
    el.get_attribute(&data_attribute_name(key))
}

pub fn set_data(el: &Element, key: &str, value: &str) -> Result<()> {
    set_attr(el, &data_attribute_name(key), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_attribute_name() {
        assert_eq!(data_attribute_name("userId"), "data-user-id");
        assert_eq!(data_attribute_name("user-id"), "data-user-id");
        assert_eq!(data_attribute_name("id"), "data-id");
        assert_eq!(data_attribute_name("data-role"), "data-role");
    }
}
