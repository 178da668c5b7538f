//! Human-readable statement dump (spec.md §4.3 "Ambient addition —
//! textual dump"), adapted from `Hif_base::Statement::dump()` /
//! `print_tuple_entries` in `hif_base.cpp`.
//!
//! This is `hif_cat`'s stdout grammar. Per spec.md §6, "the exact grammar
//! is not part of the stable interface" — callers must not parse it.

use std::io::{self, Write};

use crate::codec::types::{IdCategory, Statement, TupleEntry};

/// Render one statement in the `hif.<class> "<instance>" type(<n>) { ... }`
/// grammar, omitting braces entirely for leaf statements with empty `io`
/// and `attr` (matching the original's early return for that case).
pub fn write_statement(out: &mut impl Write, stmt: &Statement) -> io::Result<()> {
    write!(out, "hif.{}", stmt.sclass.dump_name())?;

    if let Some(instance) = &stmt.instance {
        write!(out, " \"{}\"", String::from_utf8_lossy(instance))?;
    }

    if stmt.r#type != 0 {
        write!(out, " type({})", stmt.r#type)?;
    }

    if stmt.io.is_empty() && stmt.attr.is_empty() {
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, " {{")?;
    if !stmt.io.is_empty() {
        writeln!(out, "  io {{")?;
        write_tuple_entries(out, &stmt.io, false)?;
        writeln!(out, "  }}")?;
    }
    if !stmt.attr.is_empty() {
        writeln!(out, "  attributes {{")?;
        write_tuple_entries(out, &stmt.attr, true)?;
        writeln!(out, "  }}")?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

fn write_tuple_entries(out: &mut impl Write, entries: &[TupleEntry], is_attr: bool) -> io::Result<()> {
    for (idx, te) in entries.iter().enumerate() {
        if is_attr {
            write!(out, "    @.{idx}(")?;
        } else {
            write!(out, "    %{idx}.{}(", if te.input { "in " } else { "out" })?;
        }

        write_side(out, &te.lhs, te.lhs_cat)?;

        if !te.rhs.is_empty() {
            write!(out, " = ")?;
            write_side(out, &te.rhs, te.rhs_cat)?;
        }
        writeln!(out, ")")?;
    }
    Ok(())
}

fn write_side(out: &mut impl Write, bytes: &[u8], cat: IdCategory) -> io::Result<()> {
    match cat {
        IdCategory::String => write!(out, "\"{}\"", String::from_utf8_lossy(bytes)),
        IdCategory::Base2 | IdCategory::Base3 | IdCategory::Base4 | IdCategory::Custom => {
            write!(out, "{:?}(0x", cat)?;
            for b in bytes {
                write!(out, "{b:02x}")?;
            }
            write!(out, ")")
        }
    }
}
