//! Display labels for integer-backed enums.
//!
//! Labels are derived from variant names, so `CampaignStatus::InProgress` is stored as its
//! integer value and shown as "In Progress".

use std::{collections::BTreeMap, fmt::Debug};

use sea_orm::{ActiveEnum, Iterable};

/// Maps every variant's stored integer value to its variant name.
///
/// # Returns
/// - `BTreeMap<i32, String>` - One entry per variant, ordered by value
pub fn to_dictionary<E>() -> BTreeMap<i32, String>
where
    E: ActiveEnum<Value = i32> + Iterable + Debug,
{
    E::iter()
        .map(|variant| (variant.to_value(), format!("{:?}", variant)))
        .collect()
}

/// Inserts a space before every capital letter except the first character.
///
/// "CamelCaseValue" becomes "Camel Case Value".
pub fn to_string_split(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);

    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

/// Human readable label of an enum variant.
pub fn split_label<E: Debug>(variant: &E) -> String {
    to_string_split(&format!("{:?}", variant))
}

/// Finds the variant whose name matches `name`.
///
/// Matching ignores case, whitespace, dashes and underscores, so "in progress",
/// "in-progress" and "InProgress" all resolve to the same variant.
pub fn parse<E>(name: &str) -> Option<E>
where
    E: Iterable + Debug,
{
    let wanted = normalize(name);
    if wanted.is_empty() {
        return None;
    }

    E::iter().find(|variant| normalize(&format!("{:?}", variant)) == wanted)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
