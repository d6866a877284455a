//! PO template serialization.
//!
//! Writes the populated collection as a gettext POT file: reference
//! comments, optional `msgctxt`, `msgid`, and empty `msgstr` slots for the
//! translator. Entries appear in collection (first-discovery) order, so the
//! output is reproducible across runs.

use std::io::{self, Write};

use crate::occurrence::LocalizableStringCollection;

/// Write `strings` as a POT template to `out`.
pub fn write_pot<W: Write>(strings: &LocalizableStringCollection, out: &mut W) -> io::Result<()> {
    for entry in strings.entries() {
        for location in &entry.locations {
            writeln!(out, "#: {}:{}", location.file, location.line)?;
        }
        if let Some(context) = &entry.context {
            writeln!(out, "msgctxt \"{}\"", escape(context))?;
        }
        writeln!(out, "msgid \"{}\"", escape(&entry.msg_id))?;
        match &entry.plural_id {
            Some(plural) => {
                writeln!(out, "msgid_plural \"{}\"", escape(plural))?;
                writeln!(out, "msgstr[0] \"\"")?;
                writeln!(out, "msgstr[1] \"\"")?;
            }
            None => writeln!(out, "msgstr \"\"")?,
        }
        writeln!(out)?;
    }
    Ok(())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::location::SourceLocation;
    use crate::occurrence::LocalizableOccurrence;

    #[test]
    fn writes_singular_and_plural_entries() {
        let mut strings = LocalizableStringCollection::new();
        strings.add(LocalizableOccurrence {
            msg_id: "Hello".to_string(),
            plural_id: None,
            context: Some("App.Pages.Index".to_string()),
            location: SourceLocation::new("Pages/Index.cs", 12),
        });
        strings.add(LocalizableOccurrence {
            msg_id: "one item".to_string(),
            plural_id: Some("{0} items".to_string()),
            context: None,
            location: SourceLocation::new("Pages/Cart.cs", 30),
        });

        let mut out = Vec::new();
        write_pot(&strings, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "#: Pages/Index.cs:12\n\
             msgctxt \"App.Pages.Index\"\n\
             msgid \"Hello\"\n\
             msgstr \"\"\n\
             \n\
             #: Pages/Cart.cs:30\n\
             msgid \"one item\"\n\
             msgid_plural \"{0} items\"\n\
             msgstr[0] \"\"\n\
             msgstr[1] \"\"\n\
             \n"
        );
    }

    #[test]
    fn escapes_quotes_and_newlines() {
        let mut strings = LocalizableStringCollection::new();
        strings.add(LocalizableOccurrence {
            msg_id: "Say \"hi\"\nplease".to_string(),
            plural_id: None,
            context: None,
            location: SourceLocation::new("A.cs", 1),
        });

        let mut out = Vec::new();
        write_pot(&strings, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("msgid \"Say \\\"hi\\\"\\nplease\""));
    }
}
