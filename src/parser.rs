//! XML documentation parser.
//!
//! Reads the `doc`/`members`/`member` format the C# compiler emits for `/doc`
//! into the [`Document`] model. Malformed XML is fatal; individual members
//! missing a `name` attribute are skipped with a warning.

use crate::model::{Document, Param, RawMember};
use anyhow::{bail, Context, Result};
use roxmltree::Node;

/// Parse an XML documentation file into a Document.
///
/// Sibling order is preserved; `param` children always collect into a `Vec`,
/// whether one or many are present.
pub fn parse(xml: &str) -> Result<Document> {
    let tree = roxmltree::Document::parse(xml).context("malformed XML")?;
    let root = tree.root_element();
    if root.tag_name().name() != "doc" {
        bail!(
            "expected root element <doc>, found <{}>",
            root.tag_name().name()
        );
    }

    let mut members = Vec::new();
    for members_el in root.children().filter(|n| n.has_tag_name("members")) {
        for member_el in members_el.children().filter(|n| n.has_tag_name("member")) {
            let Some(name) = member_el.attribute("name") else {
                eprintln!("warning: skipping member element with no name attribute");
                continue;
            };
            members.push(parse_member(name, member_el));
        }
    }

    Ok(Document { members })
}

fn parse_member(name: &str, el: Node) -> RawMember {
    let mut member = RawMember {
        name: name.to_string(),
        ..Default::default()
    };

    for child in el.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "summary" => member.summary = Some(block_text(child)),
            "returns" => member.returns = Some(block_text(child)),
            "param" => {
                let name = child.attribute("name").unwrap_or_default().to_string();
                member.params.push(Param {
                    name,
                    description: block_text(child),
                });
            }
            // remarks, example, exception etc. have no Markdown counterpart
            _ => {}
        }
    }

    member
}

/// Concatenated descendant text of an element, with the indentation noise of
/// pretty-printed XML removed: each line is trimmed, leading and trailing
/// blank lines are dropped, interior line breaks are kept.
fn block_text(el: Node) -> String {
    let raw: String = el
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();

    let lines: Vec<&str> = raw.lines().map(str::trim).collect();
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(0);
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(start, |i| i + 1);
    lines[start..end.max(start)].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_in_document_order() {
        let doc = parse(
            r#"<doc><members>
                <member name="T:A"><summary>a</summary></member>
                <member name="M:A.One"><summary>one</summary></member>
                <member name="M:A.Two"><summary>two</summary></member>
            </members></doc>"#,
        )
        .unwrap();
        let names: Vec<&str> = doc.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["T:A", "M:A.One", "M:A.Two"]);
    }

    #[test]
    fn single_param_still_collects_to_vec() {
        let doc = parse(
            r#"<doc><members>
                <member name="M:A.F(System.String)">
                    <summary>s</summary>
                    <param name="x">the x</param>
                </member>
            </members></doc>"#,
        )
        .unwrap();
        let member = &doc.members[0];
        assert_eq!(member.params.len(), 1);
        assert_eq!(member.params[0].name, "x");
        assert_eq!(member.params[0].description, "the x");
    }

    #[test]
    fn multiple_params_keep_declared_order() {
        let doc = parse(
            r#"<doc><members>
                <member name="M:A.F(System.String,System.Int32)">
                    <param name="first">1</param>
                    <param name="second">2</param>
                </member>
            </members></doc>"#,
        )
        .unwrap();
        let names: Vec<&str> = doc.members[0]
            .params
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn summary_indentation_is_stripped() {
        let doc = parse(
            "<doc><members><member name=\"T:A\"><summary>\n            Line one.\n            Line two.\n            </summary></member></members></doc>",
        )
        .unwrap();
        assert_eq!(
            doc.members[0].summary.as_deref(),
            Some("Line one.\nLine two.")
        );
    }

    #[test]
    fn returns_text_is_captured() {
        let doc = parse(
            r#"<doc><members>
                <member name="M:A.F"><returns>Json response.</returns></member>
            </members></doc>"#,
        )
        .unwrap();
        assert_eq!(doc.members[0].returns.as_deref(), Some("Json response."));
    }

    #[test]
    fn malformed_xml_is_fatal() {
        assert!(parse("<doc><members>").is_err());
    }

    #[test]
    fn wrong_root_element_is_fatal() {
        assert!(parse("<html></html>").is_err());
    }

    #[test]
    fn member_without_name_is_skipped() {
        let doc = parse(
            r#"<doc><members>
                <member><summary>anonymous</summary></member>
                <member name="T:A"><summary>a</summary></member>
            </members></doc>"#,
        )
        .unwrap();
        assert_eq!(doc.members.len(), 1);
        assert_eq!(doc.members[0].name, "T:A");
    }
}
