//! Identifier normalization: camel casing and English pluralization.
//!
//! Design exports name things with free-form, space-delimited strings
//! ("city cell"); templates need class identifiers ("CityCell") and
//! pluralized variable names ("cities"). All functions are pure.

/// Upper-camel-cases a space-delimited name: `"city cell"` → `"CityCell"`.
///
/// Tokens keep their interior casing; only the first letter of each
/// token is uppercased.
pub fn upper_camel_case(name: &str) -> String {
    name.split_whitespace().map(capitalize_first).collect()
}

/// Lower-camel-cases a space-delimited name: `"city cell"` → `"cityCell"`.
pub fn lower_camel_case(name: &str) -> String {
    let mut tokens = name.split_whitespace();
    let Some(first) = tokens.next() else {
        return String::new();
    };
    let mut out = lowercase_first(first);
    out.extend(tokens.map(capitalize_first));
    out
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Irregular singular/plural pairs, matched case-insensitively.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("child", "children"),
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
];

/// Words whose plural equals the singular.
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "fish",
    "information",
    "money",
    "series",
    "sheep",
    "species",
];

/// Pluralizes an English word: default `+s`, consonant-`y` → `ies`,
/// sibilant endings → `es`, irregular forms per table.
///
/// A leading uppercase letter survives pluralization ("City" →
/// "Cities"). Empty input stays empty; callers skip such prefixes.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();
    let leading_upper = word.chars().next().is_some_and(char::is_uppercase);
    let recase = |plural: String| {
        if leading_upper {
            capitalize_first(&plural)
        } else {
            plural
        }
    };

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR_PLURALS.iter().find(|(s, _)| *s == lower) {
        return recase((*plural).to_string());
    }

    if let Some(stem) = lower.strip_suffix('y') {
        let penultimate = stem.chars().last();
        if penultimate.is_some_and(|c| !"aeiou".contains(c)) {
            return recase(format!("{stem}ies"));
        }
    }

    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return recase(format!("{lower}es"));
    }

    recase(format!("{lower}s"))
}
