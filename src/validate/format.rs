//! Format validators for contact details, identifiers and character sets.
//!
//! Phone, ID-card and postal-code rules follow mainland China formats.

use std::net::Ipv4Addr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use url::Url;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9._%+-]+@",
        r"[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?",
        r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*",
        r"\.[A-Za-z]{2,}$",
    ))
    .expect("valid regex")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[3-9][0-9]{9}$").expect("valid regex"));
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("valid regex"));
static ID18_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{5}([0-9]{8})[0-9]{3}[0-9Xx]$").expect("valid regex"));
static ID15_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{5}([0-9]{6})[0-9]{3}$").expect("valid regex"));
static CHINESE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\u{4e00}-\u{9fa5}]+$").expect("valid regex"));
static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("valid regex")
});
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]{3,15}$").expect("valid regex"));

const ID_WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
const ID_CHECK_CODES: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

pub fn is_email(s: &str) -> bool {
    s.len() <= 254 && EMAIL_RE.is_match(s)
}

/// Mainland mobile number: 11 digits starting with `13`-`19`.
pub fn is_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

/// An absolute `http`, `https` or `ftp` URL with a host.
pub fn is_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https" | "ftp")
                && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Resident identity card number.
///
/// 18-digit numbers must carry a real birth date and a valid ISO 7064
/// MOD 11-2 check character; legacy 15-digit numbers need a real birth date
/// in the 1900s.
///
/// ```
/// assert!(utilkit::validate::is_id_card("11010519491231002X"));
/// assert!(!utilkit::validate::is_id_card("110105194912310021"));
/// ```
pub fn is_id_card(s: &str) -> bool {
    if let Some(caps) = ID18_RE.captures(s) {
        let last = s.chars().last().map(|c| c.to_ascii_uppercase());
        return is_birth_date(&caps[1]) && id_check_char(s) == last;
    }
    if let Some(caps) = ID15_RE.captures(s) {
        return is_birth_date(&format!("19{}", &caps[1]));
    }
    false
}

fn is_birth_date(yyyymmdd: &str) -> bool {
    NaiveDate::parse_from_str(yyyymmdd, "%Y%m%d").is_ok_and(|d| {
        (1800..=2100).contains(&d.year())
    })
}

/// Expected check character for the first 17 digits of `s`.
fn id_check_char(s: &str) -> Option<char> {
    let sum = s
        .chars()
        .take(17)
        .zip(ID_WEIGHTS)
        .try_fold(0u32, |acc, (c, w)| c.to_digit(10).map(|d| acc + d * w))?;
    Some(ID_CHECK_CODES[(sum % 11) as usize])
}

/// Six-digit postal code, not starting with 0.
pub fn is_zip_code(s: &str) -> bool {
    ZIP_RE.is_match(s)
}

/// Non-empty and ASCII letters only.
pub fn is_alpha(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Non-empty and ASCII letters or digits only.
pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Non-empty and CJK unified ideographs only.
pub fn is_chinese(s: &str) -> bool {
    CHINESE_RE.is_match(s)
}

pub fn is_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

/// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR_RE.is_match(s)
}

/// 4-16 characters of letters, digits or `_`, starting with a letter.
pub fn is_username(s: &str) -> bool {
    USERNAME_RE.is_match(s)
}
