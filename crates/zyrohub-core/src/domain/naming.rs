//! Project name normalization.
//!
//! [`normalize`] turns whatever the user typed into the canonical,
//! filesystem-safe name used for both the project directory and the
//! `name` field of the manifest. [`pascal_case`] goes the other way and
//! derives the identifier used for generated TypeScript classes.

use crate::domain::value_objects::ProjectType;

/// Prefixes removed before deriving a PascalCase identifier, in order.
const STRIPPED_PREFIXES: [&str; 2] = ["app-", "module-"];

/// Canonical project name for `raw_name` under `project_type`.
///
/// Trims, replaces every whitespace run with one hyphen, lowercases, and
/// prepends the type prefix unless the result already starts with it.
/// Never fails: `None` or an empty name yields the bare prefix.
///
/// ```
/// use zyrohub_core::domain::{naming::normalize, ProjectType};
///
/// assert_eq!(normalize(ProjectType::Application, Some("  My  API ")), "app-my-api");
/// assert_eq!(normalize(ProjectType::Module, Some("module-auth")), "module-auth");
/// assert_eq!(normalize(ProjectType::Unstructured, None), "");
/// ```
pub fn normalize(project_type: ProjectType, raw_name: Option<&str>) -> String {
    let hyphenated = raw_name
        .unwrap_or_default()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    let prefix = project_type.name_prefix();
    if hyphenated.starts_with(prefix) {
        hyphenated
    } else {
        format!("{prefix}{hyphenated}")
    }
}

/// Default name offered by the name prompt.
pub fn default_name(project_type: ProjectType) -> String {
    format!("{}my-project", project_type.name_prefix())
}

/// PascalCase identifier for a canonical project name.
///
/// Strips a leading `app-` and then a leading `module-`, uppercases the
/// first word character and every word character that follows a run of
/// hyphens, dropping those hyphens.
///
/// The whole run is dropped, not just its last hyphen: `a--b` becomes `AB`
/// rather than `A-B`, so the result stays a valid class name. Hyphens with
/// no word character after them are kept.
///
/// ```
/// use zyrohub_core::domain::naming::pascal_case;
///
/// assert_eq!(pascal_case("module-foo-bar"), "FooBar");
/// assert_eq!(pascal_case("module-a--b"), "AB");
/// assert_eq!(pascal_case("FooBar"), "FooBar");
/// ```
pub fn pascal_case(name: &str) -> String {
    let mut rest = name;
    for prefix in STRIPPED_PREFIXES {
        rest = rest.strip_prefix(prefix).unwrap_or(rest);
    }

    let chars: Vec<char> = rest.chars().collect();
    let mut out = String::with_capacity(rest.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '-' {
            let run_end = chars[i..]
                .iter()
                .position(|&ch| ch != '-')
                .map_or(chars.len(), |offset| i + offset);

            match chars.get(run_end) {
                Some(&next) if is_word_char(next) => {
                    out.push(next.to_ascii_uppercase());
                    i = run_end + 1;
                }
                _ => {
                    out.extend(&chars[i..run_end]);
                    i = run_end;
                }
            }
            continue;
        }

        if i == 0 && is_word_char(c) {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 9] = [
        "",
        "api",
        "  My Cool   Project ",
        "APP-Gateway",
        "app-",
        "module-auth",
        "appetite",
        "tab\tseparated\nname",
        "a - b",
    ];

    #[test]
    fn normalize_prefixes_exactly_once() {
        for ty in ProjectType::ALL {
            let prefix = ty.name_prefix();
            for raw in SAMPLES {
                let name = normalize(ty, Some(raw));
                assert!(name.starts_with(prefix), "{name:?} missing {prefix:?}");
                if !prefix.is_empty() {
                    assert!(!name.starts_with(&prefix.repeat(2)), "{name:?} double-prefixed");
                }
            }
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for ty in ProjectType::ALL {
            for raw in SAMPLES {
                let once = normalize(ty, Some(raw));
                assert_eq!(normalize(ty, Some(&once)), once);
            }
        }
    }

    #[test]
    fn normalize_collapses_whitespace_and_lowercases() {
        assert_eq!(
            normalize(ProjectType::Application, Some("  My Cool   Project ")),
            "app-my-cool-project"
        );
        assert_eq!(
            normalize(ProjectType::Unstructured, Some("tab\tseparated\nname")),
            "tab-separated-name"
        );
    }

    #[test]
    fn normalize_keeps_existing_prefix_case_insensitively() {
        assert_eq!(normalize(ProjectType::Application, Some("APP-Gateway")), "app-gateway");
        assert_eq!(normalize(ProjectType::Module, Some("module-auth")), "module-auth");
    }

    #[test]
    fn normalize_prefix_is_a_string_prefix_not_a_word() {
        // "appetite" does not start with "app-", so it gets the prefix.
        assert_eq!(normalize(ProjectType::Application, Some("appetite")), "app-appetite");
    }

    #[test]
    fn normalize_absent_name_yields_prefix() {
        assert_eq!(normalize(ProjectType::Application, None), "app-");
        assert_eq!(normalize(ProjectType::Module, Some("   ")), "module-");
        assert_eq!(normalize(ProjectType::Unstructured, None), "");
    }

    #[test]
    fn default_name_carries_prefix() {
        assert_eq!(default_name(ProjectType::Module), "module-my-project");
        assert_eq!(default_name(ProjectType::Unstructured), "my-project");
    }

    #[test]
    fn pascal_case_strips_type_prefix() {
        assert_eq!(pascal_case("module-foo-bar"), "FooBar");
        assert_eq!(pascal_case("app-gateway"), "Gateway");
        assert_eq!(pascal_case("plain-name"), "PlainName");
    }

    #[test]
    fn pascal_case_keeps_pascal_input() {
        assert_eq!(pascal_case("FooBar"), "FooBar");
        assert_eq!(pascal_case("X"), "X");
    }

    #[test]
    fn pascal_case_collapses_hyphen_runs() {
        assert_eq!(pascal_case("module-a--b"), "AB");
        assert_eq!(pascal_case("module-a---b"), "AB");
        assert_eq!(pascal_case("-leading"), "Leading");
    }

    #[test]
    fn pascal_case_keeps_hyphens_before_non_word_chars() {
        assert_eq!(pascal_case("a-"), "A-");
        assert_eq!(pascal_case("a-.b"), "A-.b");
    }

    #[test]
    fn pascal_case_is_idempotent() {
        let inputs = [
            "module-foo-bar",
            "app-app--x",
            "a---b",
            "trailing-",
            "snake_case-name",
            "v2-api",
            "",
        ];
        for input in inputs {
            let once = pascal_case(input);
            assert_eq!(pascal_case(&once), once, "not idempotent for {input:?}");
        }
    }
}
