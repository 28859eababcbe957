//! Hash domain governance and production-source hygiene.
//!
//! Proves:
//! 1. The domain set has the expected count
//! 2. All domain byte strings are unique and null-terminated
//! 3. All domains follow the `TILEBOT::*::V1\0` naming convention
//! 4. No raw `TILEBOT::` domain literals in production source outside
//!    `hash_domain.rs`
//! 5. No `.unwrap()` / `.expect(` in library source outside test modules

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tilebot_kernel::proof::hash_domain::HashDomain;

const LIBRARY_DIRS: [&str; 3] = [
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../kernel/src"),
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src"),
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../harness/src"),
];

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        7,
        "expected 7 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_and_null_terminated() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
        assert!(
            domain.as_bytes().ends_with(&[0]),
            "{domain} is not null-terminated"
        );
    }
}

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(
            bytes.starts_with(b"TILEBOT::"),
            "{domain} does not start with TILEBOT::"
        );
        assert!(
            bytes.ends_with(b"::V1\0"),
            "{domain} does not end with ::V1\\0"
        );
    }
}

#[test]
fn no_raw_domain_literals_outside_authority() {
    let violations = scan(&LIBRARY_DIRS, &["b\"TILEBOT::"], Some("hash_domain.rs"));
    assert!(
        violations.is_empty(),
        "raw TILEBOT:: domain literals found outside hash_domain.rs:\n{}",
        violations.join("\n")
    );
}

/// Binaries under `src/bin/` are exempt: they may abort on setup failure.
#[test]
fn no_unwrap_in_library_code() {
    let violations = scan(&LIBRARY_DIRS, &[".unwrap()", ".expect("], None);
    assert!(
        violations.is_empty(),
        "unwrap/expect found in library code:\n{}",
        violations.join("\n")
    );
}

/// Report non-comment lines containing any pattern. Everything from the
/// first `#[cfg(test)]` onward is test code; test modules close each file.
fn scan(dirs: &[&str], patterns: &[&str], authority_file: Option<&str>) -> Vec<String> {
    let mut violations = Vec::new();
    for dir in dirs {
        for path in walk(Path::new(dir)) {
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            if path.components().any(|c| c.as_os_str() == "bin") {
                continue;
            }
            let file_name = path.file_name().and_then(|n| n.to_str());
            if authority_file.is_some() && file_name == authority_file {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (i, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if trimmed.contains("#[cfg(test)]") {
                    break;
                }
                if trimmed.starts_with("//") {
                    continue;
                }
                if patterns.iter().any(|p| trimmed.contains(p)) {
                    violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
                }
            }
        }
    }
    violations
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(walk(&path));
            } else {
                results.push(path);
            }
        }
    }
    results
}

#[test]
fn scanned_directories_exist() {
    for dir in LIBRARY_DIRS {
        assert!(Path::new(dir).is_dir(), "missing source directory {dir}");
    }
}
