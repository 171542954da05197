//! String-joining helpers for report lines
//!
//! These are the only formatting primitives the report driver needs: join a
//! slice of displayable values with a separator, with no leading or trailing
//! separator. Pure functions, no state.

use std::fmt::Display;

/// Join `items` with `sep`. An empty slice yields an empty string; a single
/// element yields just that element.
pub fn mk_string<T: Display>(items: &[T], sep: &str) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(&item.to_string());
    }
    out
}

/// Join `items` with a single space, the default separator for report lines.
pub fn mk_string_spaced<T: Display>(items: &[T]) -> String {
    mk_string(items, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_yields_empty_string() {
        let items: [&str; 0] = [];
        assert_eq!(mk_string(&items, " "), "");
    }

    #[test]
    fn single_element_has_no_separator() {
        assert_eq!(mk_string(&["only"], ", "), "only");
        assert_eq!(mk_string(&[42], ", "), "42");
    }

    #[test]
    fn elements_are_joined_in_order() {
        assert_eq!(mk_string(&["a", "b", "c"], "-"), "a-b-c");
        assert_eq!(mk_string_spaced(&[0, 5, 11]), "0 5 11");
    }
}
