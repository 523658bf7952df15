//! User-facing text lookup.

use std::collections::HashMap;

pub const APP_NAME: &str = "app_name";
pub const CLICKED_ON: &str = "clicked_on";
pub const USER_PHOTO: &str = "user_photo";
pub const DELETE_USER: &str = "delete_user";

/// Resolves a text key with positional arguments.
pub trait StringLookup {
    fn resolve(&self, key: &str, args: &[&str]) -> String;
}

/// In-memory string table using printf-style placeholders.
///
/// Supported placeholders are `%s` (next argument), `%N$s` (argument `N`,
/// 1-based) and `%%`. Unknown keys resolve to the key itself.
#[derive(Debug, Clone)]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Table with the built-in English strings.
    pub fn english() -> Self {
        let mut table = Self::new();
        table.insert(APP_NAME, "User Cards");
        table.insert(CLICKED_ON, "Clicked on %1$s");
        table.insert(USER_PHOTO, "User photo");
        table.insert(DELETE_USER, "Delete user");
        table
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::english()
    }
}

impl StringLookup for StringTable {
    fn resolve(&self, key: &str, args: &[&str]) -> String {
        match self.entries.get(key) {
            Some(template) => format_template(template, args),
            None => key.to_string(),
        }
    }
}

/// Substitutes placeholders in `template`. Missing arguments become empty.
fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0;

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('s') => {
                chars.next();
                out.push_str(args.get(next_arg).copied().unwrap_or_default());
                next_arg += 1;
            }
            Some(d) if d.is_ascii_digit() => {
                let mut lookahead = chars.clone();
                let mut digits = String::new();
                while let Some(c) = lookahead.peek().copied().filter(char::is_ascii_digit) {
                    digits.push(c);
                    lookahead.next();
                }
                let is_positional = lookahead.next() == Some('$') && lookahead.next() == Some('s');
                match digits.parse::<usize>() {
                    Ok(position) if is_positional && position > 0 => {
                        out.push_str(args.get(position - 1).copied().unwrap_or_default());
                        chars = lookahead;
                    }
                    _ => out.push('%'),
                }
            }
            _ => out.push('%'),
        }
    }

    out
}
