//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the classified member sequence directly; the same skip rules
//! applied during classification have already shaped the input.

use crate::model::{Member, MemberKind};
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, members: &[Member]) -> String {
        let mut out = String::new();
        out.push_str("{\n");
        out.push_str("  \"members\": [\n");
        for (i, member) in members.iter().enumerate() {
            out.push_str(&render_member_json(member));
            if i < members.len() - 1 {
                out.push_str(",\n");
            } else {
                out.push('\n');
            }
        }
        out.push_str("  ]\n");
        out.push_str("}\n");
        out
    }
}

fn kind_name(kind: MemberKind) -> &'static str {
    match kind {
        MemberKind::Method => "method",
        MemberKind::Type => "class",
        MemberKind::PublicField => "field",
        MemberKind::Event => "event",
    }
}

fn render_member_json(member: &Member) -> String {
    // Fields collect into a Vec and join on ",\n" so no field ever needs a
    // trailing comma stripped after the fact.
    let mut fields: Vec<String> = Vec::new();

    fields.push(format!("      \"kind\": \"{}\"", kind_name(member.kind)));
    fields.push(format!("      \"name\": \"{}\"", json_escape(&member.name)));

    if let Some(ref summary) = member.summary {
        fields.push(format!("      \"summary\": \"{}\"", json_escape(summary)));
    }

    if !member.arg_types.is_empty() {
        let types: Vec<String> = member
            .arg_types
            .iter()
            .map(|t| format!("\"{}\"", json_escape(t)))
            .collect();
        fields.push(format!("      \"argTypes\": [{}]", types.join(", ")));
    }

    if !member.params.is_empty() {
        let rows: Vec<String> = member
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| {
                let arg_type = member
                    .arg_types
                    .get(i)
                    .map(|t| format!(", \"type\": \"{}\"", json_escape(t)))
                    .unwrap_or_default();
                format!(
                    "        {{ \"name\": \"{}\"{}, \"description\": \"{}\" }}",
                    json_escape(&param.name),
                    arg_type,
                    json_escape(&param.description)
                )
            })
            .collect();
        fields.push(format!(
            "      \"params\": [\n{}\n      ]",
            rows.join(",\n")
        ));
    }

    if let Some(ref returns) = member.returns {
        fields.push(format!("      \"returns\": \"{}\"", json_escape(returns)));
    }

    format!("    {{\n{}\n    }}", fields.join(",\n"))
}

fn json_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Param;

    #[test]
    fn escape_quotes_and_newlines() {
        assert_eq!(json_escape("a \"b\"\nc"), "a \\\"b\\\"\\nc");
    }

    #[test]
    fn member_serializes_with_kind_and_params() {
        let member = Member {
            kind: MemberKind::Method,
            name: "CancelMFOrder".to_string(),
            arg_types: vec!["String".to_string()],
            summary: Some("Cancel a mutual fund order.".to_string()),
            params: vec![Param {
                name: "OrderId".to_string(),
                description: "Unique order id".to_string(),
            }],
            returns: None,
        };
        let out = JsonRenderer.render(&[member]);
        assert!(out.contains("\"kind\": \"method\""));
        assert!(out.contains("\"name\": \"CancelMFOrder\""));
        assert!(out.contains("\"argTypes\": [\"String\"]"));
        assert!(out.contains(
            "{ \"name\": \"OrderId\", \"type\": \"String\", \"description\": \"Unique order id\" }"
        ));
    }

    #[test]
    fn last_field_carries_no_trailing_comma() {
        let member = Member {
            kind: MemberKind::Type,
            name: "Kite".to_string(),
            arg_types: Vec::new(),
            summary: Some("The API client class.".to_string()),
            params: Vec::new(),
            returns: None,
        };
        let out = JsonRenderer.render(&[member]);
        assert!(out.contains("\"summary\": \"The API client class.\"\n    }"));
        assert!(!out.contains(",\n    }"));
    }
}
