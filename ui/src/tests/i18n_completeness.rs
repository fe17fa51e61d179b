use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "salesboard-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Comments, terms (`-` prefix),
/// attributes and continuation lines are ignored.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files
}

/// Literal first arguments of `t!("...")` / `t!("...", ...)` in `content`.
/// Dynamically built IDs and direct `fl!` calls are not seen.
fn keys_in_source(content: &str) -> BTreeSet<String> {
    const NEEDLE: &str = "t!(\"";
    let mut found = BTreeSet::new();
    let mut rest = content;
    while let Some(pos) = rest.find(NEEDLE) {
        rest = &rest[pos + NEEDLE.len()..];
        let Some(end) = rest.find('"') else {
            break;
        };
        let key = &rest[..end];
        if !key.is_empty() && key.chars().all(valid_key_char) {
            found.insert(key.to_string());
        }
        rest = &rest[end..];
    }
    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

fn referenced_keys() -> BTreeSet<String> {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    rust_sources(&src_root)
        .iter()
        .filter_map(|path| fs::read_to_string(path).ok())
        .flat_map(|content| keys_in_source(&content))
        .collect()
}

fn fallback_keys() -> BTreeSet<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(I18N_DIR)
        .join("en-US")
        .join(FTL_FILENAME);
    let content = fs::read_to_string(&path).expect("read fallback FTL file");
    parse_ftl_keys(&content)
}

#[test]
fn source_scanner_reads_literal_keys_only() {
    let src = r#"
        let a = t!("dashboard-title");
        let b = t!("chart-bar-label", product = name, quantity = 3);
        let c = t!("Not A Key");
    "#;
    let keys = keys_in_source(src);
    assert_eq!(
        keys.into_iter().collect::<Vec<_>>(),
        vec!["chart-bar-label".to_string(), "dashboard-title".to_string()]
    );
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let fallback = fallback_keys();
    assert!(!fallback.is_empty(), "no message keys in fallback FTL");

    let missing: Vec<_> = referenced_keys()
        .into_iter()
        .filter(|k| !fallback.contains(k))
        .collect();
    assert!(
        missing.is_empty(),
        "referenced translation keys missing in fallback:\n{}",
        missing.join("\n")
    );
}

#[test]
fn fallback_has_no_unused_keys() {
    let referenced = referenced_keys();
    let unused: Vec<_> = fallback_keys()
        .into_iter()
        .filter(|k| !referenced.contains(k))
        .collect();
    assert!(
        unused.is_empty(),
        "fallback keys never looked up from Rust sources:\n{}",
        unused.join("\n")
    );
}

#[test]
fn every_locale_folder_covers_fallback() {
    let i18n_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(I18N_DIR);
    let fallback = fallback_keys();
    let mut per_locale_missing: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        assert!(path.exists(), "locale folder {locale} lacks {FTL_FILENAME}");
        let keys = parse_ftl_keys(&fs::read_to_string(&path).unwrap_or_default());
        let missing: Vec<String> = fallback.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }

    if !per_locale_missing.is_empty() {
        let mut report = String::from("locales with missing translations:\n");
        for (locale, missing) in &per_locale_missing {
            report.push_str(&format!("  {locale} ({} missing)\n", missing.len()));
            for key in missing {
                report.push_str(&format!("    {key}\n"));
            }
        }
        panic!("{report}");
    }
}
