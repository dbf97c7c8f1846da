// src/cite/names.rs
// =============================================================================
// This module holds the pure name-formatting transforms for citations.
//
// Everything here is a plain function of its input: trim a name, reorder it
// around the surname, reduce given names to initials, and join author lists
// the way each citation style wants them. No state, no I/O.
//
// The styles differ only in two places:
// - How one name is rendered (initials for APA/Harvard, inverted for MLA)
// - How the list is joined (" & " vs " and " vs "et al.")
// =============================================================================

/// Placeholder used by every style when the author list is empty
pub const UNKNOWN_AUTHORS: &str = "[Author(s) unknown]";

// Trims and collapses internal whitespace to single spaces
//
// "  Jane   Ann  Doe " -> "Jane Ann Doe". The joiners below assume their
// inputs went through this first.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Reorders a name to "Surname, Given names"
//
// "Alice Brown" -> "Brown, Alice"; a single token has no surname to pull
// out, so it passes through unchanged.
pub fn invert_name(full: &str) -> String {
    let tokens: Vec<&str> = full.split_whitespace().collect();
    match tokens.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, {}", last, rest.join(" ")),
        _ => full.trim().to_string(),
    }
}

// Reduces a name to "Surname, I. I." form
//
// "Jane Ann Doe" -> "Doe, J. A."; every non-surname token contributes one
// uppercased initial with a period. Single tokens pass through unchanged.
pub fn to_surname_initials(full: &str) -> String {
    let tokens: Vec<&str> = full.split_whitespace().collect();
    match tokens.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            let initials: Vec<String> = rest
                .iter()
                .filter_map(|token| token.chars().next())
                .map(|c| format!("{}.", c.to_uppercase()))
                .collect();
            format!("{}, {}", last, initials.join(" "))
        }
        _ => full.trim().to_string(),
    }
}

/// APA author list: "Brown, A., Day, C., & Fox, E."
pub fn join_apa(names: &[String]) -> String {
    let parts: Vec<String> = names.iter().map(|n| to_surname_initials(n)).collect();
    join_with_final(&parts, " & ", ", & ")
}

// MLA author list: inverted names, and only the first author survives
// once there are three or more ("Brown, Alice, et al.")
pub fn join_mla(names: &[String]) -> String {
    match names {
        [] => UNKNOWN_AUTHORS.to_string(),
        [only] => invert_name(only),
        [first, second] => format!("{}, and {}", invert_name(first), invert_name(second)),
        [first, ..] => format!("{}, et al.", invert_name(first)),
    }
}

/// Harvard author list: like APA but with "and" in place of the ampersand
pub fn join_harvard(names: &[String]) -> String {
    let parts: Vec<String> = names.iter().map(|n| to_surname_initials(n)).collect();
    join_with_final(&parts, " and ", ", and ")
}

// Shared grouping for APA and Harvard: two names use the pair separator,
// three or more use commas with the final separator before the last name.
fn join_with_final(parts: &[String], pair_sep: &str, final_sep: &str) -> String {
    match parts {
        [] => UNKNOWN_AUTHORS.to_string(),
        [only] => only.clone(),
        [first, second] => format!("{}{}{}", first, pair_sep, second),
        _ => {
            let head = &parts[..parts.len() - 1];
            format!("{}{}{}", head.join(", "), final_sep, parts[parts.len() - 1])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_name("  Jane   Ann  Doe "), "Jane Ann Doe");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_invert_name() {
        assert_eq!(invert_name("Alice Brown"), "Brown, Alice");
        assert_eq!(invert_name("Jane Ann Doe"), "Doe, Jane Ann");
        // Single token: nothing to invert
        assert_eq!(invert_name("Doe"), "Doe");
    }

    #[test]
    fn test_to_surname_initials() {
        assert_eq!(to_surname_initials("Jane Ann Doe"), "Doe, J. A.");
        assert_eq!(to_surname_initials("Alice Brown"), "Brown, A.");
        assert_eq!(to_surname_initials("Doe"), "Doe");
    }

    #[test]
    fn test_initials_are_uppercased() {
        assert_eq!(to_surname_initials("jane doe"), "doe, J.");
    }

    #[test]
    fn test_apa_join() {
        assert_eq!(join_apa(&names(&["Alice Brown"])), "Brown, A.");
        assert_eq!(
            join_apa(&names(&["Alice Brown", "Carl Day"])),
            "Brown, A. & Day, C."
        );
        assert_eq!(
            join_apa(&names(&["Alice Brown", "Carl Day", "Eve Fox"])),
            "Brown, A., Day, C., & Fox, E."
        );
    }

    #[test]
    fn test_mla_join() {
        assert_eq!(join_mla(&names(&["Alice Brown"])), "Brown, Alice");
        assert_eq!(
            join_mla(&names(&["Alice Brown", "Carl Day"])),
            "Brown, Alice, and Day, Carl"
        );
        // Three or more: only the first author is rendered
        assert_eq!(
            join_mla(&names(&["Alice Brown", "Carl Day", "Eve Fox"])),
            "Brown, Alice, et al."
        );
    }

    #[test]
    fn test_harvard_join() {
        assert_eq!(
            join_harvard(&names(&["Alice Brown", "Carl Day"])),
            "Brown, A. and Day, C."
        );
        assert_eq!(
            join_harvard(&names(&["Alice Brown", "Carl Day", "Eve Fox"])),
            "Brown, A., Day, C., and Fox, E."
        );
    }

    #[test]
    fn test_empty_list_yields_placeholder_in_every_style() {
        assert_eq!(join_apa(&[]), UNKNOWN_AUTHORS);
        assert_eq!(join_mla(&[]), UNKNOWN_AUTHORS);
        assert_eq!(join_harvard(&[]), UNKNOWN_AUTHORS);
    }
}
