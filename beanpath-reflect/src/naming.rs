use alloc::borrow::Cow;
use alloc::string::String;

const PREFIXES: [&str; 2] = ["get", "is"];

/// Derives a property name from an accessor name.
///
/// A leading `get` or `is` is stripped when an uppercase character follows
/// it. That character is then lowercased, unless the one after it is
/// uppercase too, so acronyms survive: `getUTC` yields `UTC`.
pub(crate) fn strip_get_is_prefix(name: &'static str) -> Cow<'static, str> {
    for prefix in PREFIXES {
        let Some(rest) = name.strip_prefix(prefix) else {
            continue;
        };
        let mut chars = rest.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if !first.is_uppercase() {
            continue;
        }
        if chars.next().is_some_and(char::is_uppercase) {
            return Cow::Borrowed(rest);
        }
        let mut property = String::with_capacity(rest.len());
        property.extend(first.to_lowercase());
        property.push_str(&rest[first.len_utf8()..]);
        return Cow::Owned(property);
    }
    Cow::Borrowed(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accessor_prefixes() {
        for (accessor, property) in [
            ("getProperty", "property"),
            ("isProperty", "property"),
            ("getA", "a"),
            ("getUTC", "UTC"),
            ("isOK", "OK"),
            ("getURLs", "URLs"),
            ("getÉtat", "état"),
        ] {
            assert_eq!(strip_get_is_prefix(accessor), property, "{accessor}");
        }
    }

    #[test]
    fn leaves_other_names_unchanged() {
        for name in ["property", "is", "get", "getting", "isabel", "size", "get_name"] {
            assert!(
                matches!(strip_get_is_prefix(name), Cow::Borrowed(n) if n == name),
                "{name}"
            );
        }
    }
}
