//! Wire-format data model: ID categories, statement classes, tuple entries,
//! and statements. Rust port of `hif_base.hpp`'s `ID_cat` / `Statement_class`
//! / `Tuple_entry` / `Statement`.
//!
//! Per SPEC_FULL.md §3's note on the original's namespace collision: the
//! original's `ID_cat` enum additionally carries a `Net_cat` tag ahead of
//! `String_cat`, used only by the *identifier record* tag space, and its
//! `Statement_class` enum additionally carries a `Declare_class` used only
//! by the writer's internal interning records — neither belongs to the
//! five-category / nine-class wire sets spec.md §3 closes over for
//! statement tuple entries. This crate keeps `IdCategory` (identifier
//! records, §4.2) and `StatementClass` (statement headers, §4.3) as two
//! distinct enums rather than reusing the original's overloaded tag space.

use core::fmt;

use crate::error::FormatError;

/// 3-bit identifier category tag (spec.md §3). Closed set; the codec
/// itself is category-agnostic beyond storing and round-tripping the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum IdCategory {
    String = 0,
    Base2 = 1,
    Base3 = 2,
    Base4 = 3,
    Custom = 4,
}

impl IdCategory {
    pub fn from_tag(tag: u8) -> Result<Self, FormatError> {
        match tag {
            0 => Ok(IdCategory::String),
            1 => Ok(IdCategory::Base2),
            2 => Ok(IdCategory::Base3),
            3 => Ok(IdCategory::Base4),
            4 => Ok(IdCategory::Custom),
            other => Err(FormatError::BadCategoryTag(other)),
        }
    }

    pub fn tag(self) -> u8 {
        self as u8
    }
}

/// 4-bit statement class tag (spec.md §3), ordered as in the original
/// `Statement_class` enum (minus `Declare_class`, which belongs to the
/// identifier-record tag space — see the module doc comment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StatementClass {
    Node = 0,
    Assign = 1,
    Attr = 2,
    OpenCall = 3,
    ClosedCall = 4,
    OpenDef = 5,
    ClosedDef = 6,
    End = 7,
    Use = 8,
}

impl StatementClass {
    pub fn from_tag(tag: u8) -> Result<Self, FormatError> {
        match tag {
            0 => Ok(StatementClass::Node),
            1 => Ok(StatementClass::Assign),
            2 => Ok(StatementClass::Attr),
            3 => Ok(StatementClass::OpenCall),
            4 => Ok(StatementClass::ClosedCall),
            5 => Ok(StatementClass::OpenDef),
            6 => Ok(StatementClass::ClosedDef),
            7 => Ok(StatementClass::End),
            8 => Ok(StatementClass::Use),
            other => Err(FormatError::BadClassTag(other)),
        }
    }

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Name used by the textual dump (`hif.<name>`), matching the original
    /// `class2name[]` table in `Hif_base::Statement::dump()`.
    pub fn dump_name(self) -> &'static str {
        match self {
            StatementClass::Node => "node",
            StatementClass::Assign => "assign",
            StatementClass::Attr => "attr",
            StatementClass::OpenCall => "open_call",
            StatementClass::ClosedCall => "closed_call",
            StatementClass::OpenDef => "open_def",
            StatementClass::ClosedDef => "closed_def",
            StatementClass::End => "end",
            StatementClass::Use => "use",
        }
    }
}

impl fmt::Display for StatementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dump_name())
    }
}

/// One (possibly partial) pair of category-tagged byte sequences — the
/// building block of a statement's `io` and `attr` lists. Port of
/// `Hif_base::Tuple_entry`.
///
/// `rhs.is_empty()` means "bare" / lhs-only entry; `rhs_cat` then defaults
/// to `IdCategory::String` per §4.3's tuple-entry-list decoding rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleEntry {
    /// `true` for an input or attribute entry, `false` for an output.
    pub input: bool,
    pub lhs: Vec<u8>,
    pub lhs_cat: IdCategory,
    pub rhs: Vec<u8>,
    pub rhs_cat: IdCategory,
}

impl TupleEntry {
    /// A paired entry with both a lhs and a rhs.
    pub fn pair(
        input: bool,
        lhs: impl Into<Vec<u8>>,
        lhs_cat: IdCategory,
        rhs: impl Into<Vec<u8>>,
        rhs_cat: IdCategory,
    ) -> Self {
        Self {
            input,
            lhs: lhs.into(),
            lhs_cat,
            rhs: rhs.into(),
            rhs_cat,
        }
    }

    /// A bare, lhs-only entry (empty `rhs`, default `String` rhs category).
    pub fn bare(input: bool, lhs: impl Into<Vec<u8>>, lhs_cat: IdCategory) -> Self {
        Self {
            input,
            lhs: lhs.into(),
            lhs_cat,
            rhs: Vec::new(),
            rhs_cat: IdCategory::String,
        }
    }
}

/// One statement of the stream. Port of `Hif_base::Statement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sclass: StatementClass,
    /// 12-bit unsigned type tag, `0..=4095`.
    pub r#type: u16,
    /// `None` ⇒ "no instance".
    pub instance: Option<Vec<u8>>,
    pub io: Vec<TupleEntry>,
    pub attr: Vec<TupleEntry>,
}

impl Statement {
    /// Bare constructor for a given class with `type == 0`, no instance,
    /// and empty `io`/`attr` lists, mirroring the original's
    /// `Statement(Statement_class sclass)` single-argument constructor.
    pub fn new(sclass: StatementClass) -> Self {
        Self {
            sclass,
            r#type: 0,
            instance: None,
            io: Vec::new(),
            attr: Vec::new(),
        }
    }

    // ── Original-source supplement: convenience constructors (SPEC_FULL.md §4.5) ──
    // Mirror `Hif_write::create_assign()` and friends from hif_write.hpp.
    // Pure ergonomic sugar over the data model above; no wire-format impact.

    pub fn node(r#type: u16) -> Self {
        let mut s = Self::new(StatementClass::Node);
        s.r#type = r#type;
        s
    }

    pub fn assign(r#type: u16) -> Self {
        let mut s = Self::new(StatementClass::Assign);
        s.r#type = r#type;
        s
    }

    pub fn attr(r#type: u16) -> Self {
        let mut s = Self::new(StatementClass::Attr);
        s.r#type = r#type;
        s
    }

    pub fn open_call(r#type: u16) -> Self {
        let mut s = Self::new(StatementClass::OpenCall);
        s.r#type = r#type;
        s
    }

    pub fn closed_call(r#type: u16) -> Self {
        let mut s = Self::new(StatementClass::ClosedCall);
        s.r#type = r#type;
        s
    }

    pub fn open_def(r#type: u16) -> Self {
        let mut s = Self::new(StatementClass::OpenDef);
        s.r#type = r#type;
        s
    }

    pub fn closed_def(r#type: u16) -> Self {
        let mut s = Self::new(StatementClass::ClosedDef);
        s.r#type = r#type;
        s
    }

    pub fn end(r#type: u16) -> Self {
        let mut s = Self::new(StatementClass::End);
        s.r#type = r#type;
        s
    }

    pub fn use_stmt(r#type: u16) -> Self {
        let mut s = Self::new(StatementClass::Use);
        s.r#type = r#type;
        s
    }

    pub fn with_instance(mut self, instance: impl Into<Vec<u8>>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn push_input(
        mut self,
        lhs: impl Into<Vec<u8>>,
        lhs_cat: IdCategory,
        rhs: impl Into<Vec<u8>>,
        rhs_cat: IdCategory,
    ) -> Self {
        self.io.push(TupleEntry::pair(true, lhs, lhs_cat, rhs, rhs_cat));
        self
    }

    pub fn push_bare_input(mut self, lhs: impl Into<Vec<u8>>, lhs_cat: IdCategory) -> Self {
        self.io.push(TupleEntry::bare(true, lhs, lhs_cat));
        self
    }

    pub fn push_output(
        mut self,
        lhs: impl Into<Vec<u8>>,
        lhs_cat: IdCategory,
        rhs: impl Into<Vec<u8>>,
        rhs_cat: IdCategory,
    ) -> Self {
        self.io.push(TupleEntry::pair(false, lhs, lhs_cat, rhs, rhs_cat));
        self
    }

    pub fn push_bare_output(mut self, lhs: impl Into<Vec<u8>>, lhs_cat: IdCategory) -> Self {
        self.io.push(TupleEntry::bare(false, lhs, lhs_cat));
        self
    }

    pub fn push_attr(mut self, lhs: impl Into<Vec<u8>>, rhs: impl Into<Vec<u8>>) -> Self {
        self.attr
            .push(TupleEntry::pair(true, lhs, IdCategory::String, rhs, IdCategory::String));
        self
    }
}

/// Precondition check for `Statement::type` and attribute `lhs`
/// non-emptiness (spec.md §7: "Precondition violation ... Surface as
/// assertion/panic — not recoverable"). Called by `Session::add` before
/// any encoding happens.
///
/// Open question resolution (recorded in DESIGN.md): spec.md §4.4/§7 both
/// state the precondition as "non-empty lhs and non-empty rhs", but §8
/// scenario 3 requires an `Attr` statement with attribute `("name", "")`
/// to round-trip successfully. An attribute with an empty *name* is
/// nonsensical (there is nothing to look up), but an empty *value* is a
/// legitimate content (e.g. clearing a string field), and scenario 3 is
/// the authoritative testable property — so this crate enforces
/// non-emptiness on `lhs` only.
pub fn assert_statement_preconditions(stmt: &Statement) {
    assert!(
        stmt.r#type <= 0x0FFF,
        "hif: statement type {} exceeds 12-bit range (0..=4095)",
        stmt.r#type
    );
    for (i, entry) in stmt.attr.iter().enumerate() {
        assert!(
            !entry.lhs.is_empty(),
            "hif: attribute entry {i} has empty lhs"
        );
    }
}
