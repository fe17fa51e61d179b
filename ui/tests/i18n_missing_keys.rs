use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Translation completeness test.
/// Every non-fallback locale must define the keys of the fallback (en-US)
/// `salesboard-ui.ftl`, and each message must use the same `{ $variables }`
/// as its fallback so runtime arguments resolve in every language.
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/salesboard-ui.ftl`
/// 2. Copy all keys from `en-US/salesboard-ui.ftl`
/// 3. Register it in `LOCALES` below.
const EN_US: &str = include_str!("../i18n/en-US/salesboard-ui.ftl");
const PT_BR: &str = include_str!("../i18n/pt-BR/salesboard-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/salesboard-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("pt-BR", PT_BR), ("es-ES", ES_ES)];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = messages(EN_US, "en-US");
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let keys = messages(src, locale);
        let missing: Vec<&str> = fallback
            .keys()
            .filter(|k| !keys.contains_key(*k))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n\n")
    );
}

#[test]
fn placeholders_match_fallback() {
    let fallback = messages(EN_US, "en-US");
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        for (key, body) in messages(src, locale) {
            let Some(reference) = fallback.get(&key) else {
                continue;
            };
            let expected = variables(reference);
            let found = variables(&body);
            if expected != found {
                failures.push(format!("{locale}/{key}: expected {expected:?}, found {found:?}"));
            }
        }
    }

    assert!(failures.is_empty(), "Placeholder mismatch:\n  {}", failures.join("\n  "));
}

#[test]
fn bar_label_takes_product_and_quantity() {
    let fallback = messages(EN_US, "en-US");
    let body = fallback.get("chart-bar-label").expect("chart-bar-label defined");
    let vars = variables(body);
    assert!(vars.contains("product"));
    assert!(vars.contains("quantity"));
}

/// Message id -> single-line body. Panics on duplicate definitions.
fn messages(src: &str, locale: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((left, right)) = line.split_once('=') else {
            continue;
        };
        let key = left.trim();
        if key.is_empty() || key.contains(char::is_whitespace) || key.starts_with('-') {
            continue;
        }
        if out.insert(key.to_string(), right.trim().to_string()).is_some() {
            dups.insert(key.to_string());
        }
    }

    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
    out
}

/// `$name` references inside a Fluent pattern.
fn variables(body: &str) -> HashSet<String> {
    body.split('$')
        .skip(1)
        .map(|tail| {
            tail.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}
