//! Placeholder substitution engine
//!
//! Takes a category's template and a map of user-entered values and produces
//! the final prompt. Every `{{name}}` token resolves independently: the user
//! value when present and non-empty, otherwise the `[NOT SPECIFIED]`
//! sentinel. The function is total; there is no failure path.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::catalog::{self, Category};

/// User-entered values for one in-progress composition
///
/// Keys are field names from the active category. Missing or empty entries
/// degrade to the sentinel at composition time.
pub type FieldValues = HashMap<String, String>;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{(.*?)\}\}").unwrap())
}

/// Fill the category's template with the given field values
///
/// Pure function: no side effects, identical inputs yield identical output.
/// Appending the result to history is the caller's explicit step.
pub fn compose(category: Category, values: &FieldValues) -> String {
    let template = catalog::template(category);
    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            let name = caps[1].trim();
            match values.get(name) {
                Some(value) if !value.is_empty() => value.clone(),
                _ => crate::SENTINEL.to_string(),
            }
        })
        .into_owned()
}
