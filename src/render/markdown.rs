//! Markdown reference-page renderer.
//!
//! One fragment per member, concatenated in document order: a heading with
//! an icon label, the summary paragraph, a parameter table for documented
//! params, and a **Returns:** line where present.

use crate::model::{Member, MemberKind};
use crate::render::Renderer;

pub struct MarkdownRenderer {
    pub assets: String,
    pub icons: bool,
}

impl Renderer for MarkdownRenderer {
    fn render(&self, members: &[Member]) -> String {
        let mut out = String::new();
        for member in members {
            out.push_str(&self.heading(member));
            out.push_str("\n\n");

            if let Some(ref summary) = member.summary {
                out.push_str(summary);
                out.push_str("\n\n");
            }

            if !member.params.is_empty() {
                self.param_table(&mut out, member);
            }

            if let Some(ref returns) = member.returns {
                out.push_str("**Returns:** ");
                out.push_str(returns);
                out.push_str("\n\n");
            }
        }
        out
    }
}

impl MarkdownRenderer {
    /// Types get a level-2 heading with a " Class" suffix; methods, fields
    /// and events get level-3 headings with no suffix.
    fn heading(&self, member: &Member) -> String {
        let (level, asset) = match member.kind {
            MemberKind::Type => ("##", "class.jpg"),
            MemberKind::Method => ("###", "method.jpg"),
            MemberKind::PublicField => ("###", "pubfield.jpg"),
            MemberKind::Event => ("###", "event.jpg"),
        };
        let suffix = if member.kind == MemberKind::Type {
            " Class"
        } else {
            ""
        };

        if self.icons {
            format!(
                "{} ![{}]({}/{}) &nbsp;&nbsp;{}{}",
                level,
                member.kind.label(),
                self.assets,
                asset,
                member.name,
                suffix
            )
        } else {
            format!("{} {}{}", level, member.name, suffix)
        }
    }

    /// Parameter table: one row per documented param, type drawn positionally
    /// from the method's argument-type list. A param past the end of the
    /// argument-type list has no type to pair with; its row is skipped with
    /// a warning rather than rendered with a placeholder.
    fn param_table(&self, out: &mut String, member: &Member) {
        out.push_str("| Argument | Type | Description |\n");
        out.push_str("| --- | --- | --- |\n");
        for (i, param) in member.params.iter().enumerate() {
            let Some(arg_type) = member.arg_types.get(i) else {
                eprintln!(
                    "warning: {}: parameter `{}` has no matching argument type, row skipped",
                    member.name, param.name
                );
                continue;
            };
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                param.name,
                arg_type,
                flatten(&param.description)
            ));
        }
        out.push('\n');
    }
}

/// Collapse a multi-line description into a single table-safe line.
fn flatten(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
