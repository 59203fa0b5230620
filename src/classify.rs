//! Member-name classification.
//!
//! A raw `name` attribute has the format
//! `<kind-letter>:<dotted-name>[(<comma-separated-arg-types>)]`, e.g.
//! `M:KiteConnect.Kite.CancelMFOrder(System.String)`. This module maps it to
//! a display kind, a cleaned display name, and the ordered argument-type
//! list used to fill the Type column of parameter tables.

use crate::model::MemberKind;
use regex::Regex;
use std::sync::LazyLock;

/// Core-library prefix stripped from argument types.
const SYSTEM_PREFIX: &str = "System.";

// `Dictionary{K,V}` → `Dictionary{K:V}`, so the comma inside a generic pair
// survives the later comma split as a single token. Must run before the
// argument list is split on commas.
static RE_DICTIONARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Dictionary\{([^,}]*),([^}]*)\}").unwrap());

/// Classification result for one member name.
#[derive(Debug, PartialEq, Eq)]
pub struct Classified {
    pub kind: MemberKind,
    pub name: String,
    pub arg_types: Vec<String>,
}

/// Classify a raw `name` attribute, stripping the given namespace prefixes.
///
/// Returns `None` for members that should not appear in the output:
/// unrecognized kind letters and generated event-handler delegate types
/// (names containing both `Handler` and `On` — the event itself still
/// renders, only its delegate is hidden).
pub fn classify(raw: &str, namespaces: &[String]) -> Option<Classified> {
    let (letter, rest) = raw.split_once(':')?;
    let kind = match letter {
        "M" => MemberKind::Method,
        "T" => MemberKind::Type,
        "P" => MemberKind::PublicField,
        "E" => MemberKind::Event,
        _ => return None,
    };

    if rest.contains("Handler") && rest.contains("On") {
        return None;
    }

    let mut rest = rest.to_string();
    for ns in namespaces {
        rest = rest.replace(ns.as_str(), "");
    }

    let (base, args) = match rest.split_once('(') {
        Some((base, args)) => (base.to_string(), Some(args.to_string())),
        None => (rest, None),
    };

    // Only methods carry a meaningful argument list; indexer properties may
    // also have parens but get no parameter table.
    let arg_types = match args {
        Some(args) if kind == MemberKind::Method => parse_arg_types(&args),
        _ => Vec::new(),
    };

    let name = if let Some(type_name) = base.strip_suffix(".#ctor") {
        format!("{} Constructor", type_name)
    } else if kind == MemberKind::Method {
        // Methods render by bare name; the declaring type has its own
        // heading. Events and fields keep their type qualifier.
        base.rsplit('.').next().unwrap_or(&base).to_string()
    } else {
        base
    };

    Some(Classified {
        kind,
        name,
        arg_types,
    })
}

/// Normalize a `--namespace` value into the literal prefix that is stripped:
/// a trailing `.` is implied when absent.
pub fn namespace_prefix(ns: &str) -> String {
    if ns.ends_with('.') {
        ns.to_string()
    } else {
        format!("{}.", ns)
    }
}

/// Parse the text after the opening `(` of a method signature into an
/// ordered argument-type list.
fn parse_arg_types(args: &str) -> Vec<String> {
    let normalized = RE_DICTIONARY.replace_all(args, "Dictionary{$1:$2}");
    let normalized = normalized.replace(SYSTEM_PREFIX, "");
    let inner = normalized.trim_end().trim_end_matches(')');
    if inner.is_empty() {
        return Vec::new();
    }
    inner.split(',').map(|t| t.trim().to_string()).collect()
}
