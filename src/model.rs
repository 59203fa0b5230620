//! Data model for parsed and classified documentation members — format-agnostic.

/// Complete parsed document from a single XML file.
///
/// Repeated elements always parse to a `Vec`, even when only one sibling is
/// present, so consumers never branch on "list or single item".
#[derive(Debug, Default)]
pub struct Document {
    /// All `member` entries, in document order.
    pub members: Vec<RawMember>,
}

/// One `member` element as read from the XML, before classification.
#[derive(Debug, Default)]
pub struct RawMember {
    /// Raw `name` attribute, e.g. `M:KiteConnect.Kite.CancelMFOrder(System.String)`
    pub name: String,
    /// `summary` child text
    pub summary: Option<String>,
    /// `param` children, in declared order
    pub params: Vec<Param>,
    /// `returns` child text
    pub returns: Option<String>,
}

/// A documented parameter. The parameter's type is not an attribute here; it
/// is paired positionally with the method's argument-type list.
#[derive(Debug, Default)]
pub struct Param {
    pub name: String,
    pub description: String,
}

/// Kind of a documented member, from the one-letter code in the `name`
/// attribute: `M`ethod, `T`ype, `P`ublic field, `E`vent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Method,
    Type,
    PublicField,
    Event,
}

impl MemberKind {
    /// Human-readable label used in headings and structured output.
    pub fn label(&self) -> &'static str {
        match self {
            MemberKind::Method => "Method",
            MemberKind::Type => "Class",
            MemberKind::PublicField => "Field",
            MemberKind::Event => "Event",
        }
    }
}

/// A classified member, ready to render.
#[derive(Debug)]
pub struct Member {
    pub kind: MemberKind,
    /// Display name with namespace prefixes stripped and `.#ctor` rewritten
    pub name: String,
    /// Argument types parsed from the parenthesized signature suffix,
    /// in order (empty for non-methods)
    pub arg_types: Vec<String>,
    pub summary: Option<String>,
    pub params: Vec<Param>,
    pub returns: Option<String>,
}
