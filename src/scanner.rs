use serde::Serialize;

use crate::lexer::{Token, tokenize};
use crate::registry::TestRegistry;

/// Marker superclass that makes a class declaration eligible for scanning.
pub const SENTINEL_SUPERCLASS: &str = "XCTestCase";

/// Prefix a method name must carry to qualify for registration.
pub const TEST_METHOD_PREFIX: &str = "test";

#[derive(Debug, Default, Clone)]
pub struct ScanOptions {
    /// Class/extension names skipped entirely.
    pub excluded_classes: Vec<String>,
    /// Exact method names dropped after the prefix filter.
    pub excluded_tests: Vec<String>,
}

/// Discovery counts for the optional diagnostic mode. Lenient scanning never
/// fails, so this is the only visibility into how much of the input matched.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScanStats {
    pub classes: usize,
    pub extensions: usize,
    pub methods_seen: usize,
    pub methods_registered: usize,
    pub excluded_classes: usize,
    pub excluded_methods: usize,
}

/// One pass over the whole input. Declarations are recognized anywhere in the
/// text, not just at top level; anything that does not match the grammar is
/// silently treated as background and skipped.
pub fn scan(source: &str, options: &ScanOptions) -> (TestRegistry, ScanStats) {
    let tokens = tokenize(source);
    let mut registry = TestRegistry::new();
    let mut stats = ScanStats::default();

    let mut i = 0;
    while i < tokens.len() {
        let site = match &tokens[i] {
            Token::Ident(word) if word == "class" => match_test_class(&tokens, i),
            Token::Ident(word) if word == "extension" => match_extension(&tokens, i),
            _ => None,
        };

        let Some(site) = site else {
            i += 1;
            continue;
        };

        match site.kind {
            DeclKind::Class => stats.classes += 1,
            DeclKind::Extension => stats.extensions += 1,
        }

        let (methods, body_end) = collect_methods(&tokens, site.body_start);
        stats.methods_seen += methods.len();

        if options.excluded_classes.iter().any(|c| c == &site.name) {
            stats.excluded_classes += 1;
        } else {
            match site.kind {
                DeclKind::Class => registry.record_class(&site.name),
                DeclKind::Extension => registry.record_extension(&site.name),
            }
            for method in &methods {
                if !method.starts_with(TEST_METHOD_PREFIX) {
                    continue;
                }
                if options.excluded_tests.iter().any(|t| t == method) {
                    stats.excluded_methods += 1;
                    continue;
                }
                registry.add_method(&site.name, method);
                stats.methods_registered += 1;
            }
        }

        i = body_end;
    }

    (registry, stats)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclKind {
    Class,
    Extension,
}

#[derive(Debug)]
struct DeclSite {
    kind: DeclKind,
    name: String,
    /// Token index just past the body's opening brace.
    body_start: usize,
}

/// `class <Name> : … XCTestCase … {` — the sentinel may appear anywhere in
/// the inheritance clause. A class without the sentinel is not a match; its
/// body is left to the outer walk so nested declarations are still found.
fn match_test_class(tokens: &[Token], start: usize) -> Option<DeclSite> {
    let name = as_ident(tokens.get(start + 1))?;
    if !matches!(tokens.get(start + 2), Some(Token::Colon)) {
        return None;
    }

    let mut i = start + 3;
    let mut saw_sentinel = false;
    while let Some(token) = tokens.get(i) {
        match token {
            Token::Ident(id) => {
                if id == SENTINEL_SUPERCLASS {
                    saw_sentinel = true;
                }
            }
            Token::Colon => {}
            Token::LBrace => {
                if !saw_sentinel {
                    return None;
                }
                return Some(DeclSite {
                    kind: DeclKind::Class,
                    name: name.to_string(),
                    body_start: i + 1,
                });
            }
            Token::RBrace => return None,
        }
        i += 1;
    }
    None
}

/// `extension <Name> [ : <Protocol> … ] {` — any name is accepted; merging
/// by name equality with sentinel-qualified classes is the default policy.
fn match_extension(tokens: &[Token], start: usize) -> Option<DeclSite> {
    let name = as_ident(tokens.get(start + 1))?;

    let mut i = start + 2;
    while let Some(token) = tokens.get(i) {
        match token {
            Token::Ident(_) | Token::Colon => {}
            Token::LBrace => {
                return Some(DeclSite {
                    kind: DeclKind::Extension,
                    name: name.to_string(),
                    body_start: i + 1,
                });
            }
            Token::RBrace => return None,
        }
        i += 1;
    }
    None
}

/// Walk a declaration body with explicit brace-depth counting. Named `func`
/// headers are collected at depth 1 only, so closures and nested functions
/// inside method bodies are never attributed to the class. `init`/`deinit`
/// carry no name and fall through without producing a method or ending the
/// walk. Returns the collected names and the index just past the body.
fn collect_methods(tokens: &[Token], body_start: usize) -> (Vec<String>, usize) {
    let mut methods = Vec::new();
    let mut depth = 1usize;
    let mut i = body_start;

    while i < tokens.len() && depth > 0 {
        match &tokens[i] {
            Token::LBrace => depth += 1,
            Token::RBrace => depth -= 1,
            Token::Ident(word) if depth == 1 && word == "func" => {
                if let Some(name) = as_ident(tokens.get(i + 1)) {
                    methods.push(name.to_string());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    (methods, i)
}

fn as_ident(token: Option<&Token>) -> Option<&str> {
    match token {
        Some(Token::Ident(name)) => Some(name),
        _ => None,
    }
}
