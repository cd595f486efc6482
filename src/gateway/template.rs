//-
// Copyright (c) 2026, the gwgate developers
//
// This file is part of gwgate.
//
// gwgate is free software: you can  redistribute it and/or modify it under the
// terms of  the GNU General Public  License as published by  the Free Software
// Foundation, either version  3 of the License, or (at  your option) any later
// version.
//
// gwgate is distributed  in the hope that  it will be useful,  but WITHOUT ANY
// WARRANTY; without  even the implied  warranty of MERCHANTABILITY  or FITNESS
// FOR  A PARTICULAR  PURPOSE.  See the  GNU General  Public  License for  more
// details.
//
// You should have received a copy of the GNU General Public License along with
// gwgate. If not, see <http://www.gnu.org/licenses/>.

//! Macro expansion for response templates.
//!
//! Templates are plain strings with two kinds of macros: `${name}` resolved
//! against the response's own table, and `$(name)` resolved against the
//! table derived from the command being answered. Values are computed once
//! when the table is built; expansion is a single left-to-right pass per
//! kind and inserted text is never re-scanned.

use crate::support::error::Error;

/// An ordered set of named macro values.
#[derive(Clone, Debug, Default)]
pub struct MacroTable {
    entries: Vec<(&'static str, String)>,
}

impl MacroTable {
    pub fn new() -> MacroTable {
        MacroTable::default()
    }

    /// Adds or replaces a value.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        for entry in &mut self.entries {
            if entry.0 == name {
                entry.1 = value;
                return;
            }
        }
        self.entries.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Expands macros of one bracket style against one table.
///
/// A `$` that is not followed by a well-formed macro (closing bracket
/// missing, or a `$`/`{`/`}` inside the name) is copied through verbatim.
/// A well-formed macro whose name is not in the table is an error.
fn expand_with(
    text: &str,
    open: char,
    close: char,
    table: &MacroTable,
) -> Result<String, Error> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(ix) = rest.find('$') {
        out.push_str(&rest[..ix]);
        let after = &rest[ix + 1..];

        if !after.starts_with(open) {
            out.push('$');
            rest = after;
            continue;
        }

        let body = &after[open.len_utf8()..];
        let mut name_end = None;
        for (jx, c) in body.char_indices() {
            if c == close {
                name_end = Some(jx);
                break;
            }
            if c == '$' || c == '{' || c == '}' {
                break;
            }
        }

        match name_end {
            Some(jx) => {
                let name = &body[..jx];
                match table.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(Error::UnknownMacro(name.to_owned()))
                    },
                }
                rest = &body[jx + close.len_utf8()..];
            },
            None => {
                out.push('$');
                rest = after;
            },
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Expands `${...}` against `on_self`, then `$(...)` against `on_command`.
pub fn expand(
    template: &str,
    on_self: &MacroTable,
    on_command: &MacroTable,
) -> Result<String, Error> {
    let pass_one = expand_with(template, '{', '}', on_self)?;
    expand_with(&pass_one, '(', ')', on_command)
}

#[cfg(test)]
mod test {
    use super::*;

    fn table(pairs: &[(&'static str, &str)]) -> MacroTable {
        let mut t = MacroTable::new();
        for (n, v) in pairs {
            t.set(n, *v);
        }
        t
    }

    #[test]
    fn expands_both_macro_kinds() {
        let on_self = table(&[("who", "self")]);
        let on_command = table(&[("what", "command")]);
        assert_eq!(
            "from self about command",
            expand("from ${who} about $(what)", &on_self, &on_command)
                .unwrap()
        );
    }

    #[test]
    fn adjacent_macros_expand_independently() {
        let t = table(&[("a", "X"), ("b", "Y")]);
        assert_eq!(
            "XY",
            expand("${a}${b}", &t, &MacroTable::new()).unwrap()
        );
    }

    #[test]
    fn inserted_text_is_not_rescanned() {
        let t = table(&[("a", "${a}")]);
        assert_eq!(
            "${a}",
            expand("${a}", &t, &MacroTable::new()).unwrap()
        );
    }

    #[test]
    fn unknown_macro_fails() {
        match expand("${nope}", &MacroTable::new(), &MacroTable::new()) {
            Err(Error::UnknownMacro(name)) => assert_eq!("nope", name),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn malformed_macros_pass_through() {
        let t = MacroTable::new();
        assert_eq!("$ {a}", expand("$ {a}", &t, &t).unwrap());
        assert_eq!("${unclosed", expand("${unclosed", &t, &t).unwrap());
        assert_eq!("100$", expand("100$", &t, &t).unwrap());
    }

    #[test]
    fn set_replaces_existing_value() {
        let mut t = MacroTable::new();
        t.set("a", "1");
        t.set("a", "2");
        assert_eq!(Some("2"), t.get("a"));
    }
}
