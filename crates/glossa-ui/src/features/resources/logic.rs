//! Row shaping for the resource grid.
//!
//! # Design
//! - Derive everything the grid renders from the service payload; store nothing.
//! - Preserve input order; one row per resource.
//! - Persona initials follow the toolkit rules so avatars look familiar.

use crate::models::Resource;

/// Grid column descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Stable column key.
    pub key: &'static str,
    /// Header label.
    pub name: &'static str,
    /// Resource field rendered by the column.
    pub field_name: &'static str,
    /// Minimum width in pixels.
    pub min_width: u32,
    /// Maximum width in pixels.
    pub max_width: u32,
    /// Whether the user may resize the column.
    pub resizable: bool,
}

/// Columns shown by the resource grid, in display order.
pub const RESOURCE_COLUMNS: [ColumnSpec; 2] = [
    ColumnSpec {
        key: "name",
        name: "Name",
        field_name: "key",
        min_width: 50,
        max_width: 300,
        resizable: true,
    },
    ColumnSpec {
        key: "editor",
        name: "Modified By",
        field_name: "editor",
        min_width: 100,
        max_width: 150,
        resizable: false,
    },
];

/// Render-ready view of one resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceRow {
    /// Resource key shown as the persona title.
    pub key: String,
    /// Editor initials shown in the avatar.
    pub initials: String,
    /// Secondary persona line.
    pub secondary_text: String,
    /// Editor name for the second column.
    pub editor: String,
}

impl From<&Resource> for ResourceRow {
    fn from(resource: &Resource) -> Self {
        Self {
            key: resource.key.clone(),
            initials: initials(&resource.editor),
            secondary_text: secondary_text(resource).to_string(),
            editor: resource.editor.clone(),
        }
    }
}

/// Build one row per resource, in input order.
#[must_use]
pub fn resource_rows(resources: &[Resource]) -> Vec<ResourceRow> {
    resources.iter().map(ResourceRow::from).collect()
}

/// Translation when present, otherwise the source text.
#[must_use]
pub fn secondary_text(resource: &Resource) -> &str {
    resource
        .translation
        .as_deref()
        .filter(|translation| !translation.is_empty())
        .unwrap_or(&resource.source)
}

/// Persona initials for a display name.
#[must_use]
pub fn initials(display_name: &str) -> String {
    let cleaned = clean_display_name(display_name);
    if cleaned.is_empty() || cleaned.chars().any(is_unsupported) || is_phone_number(&cleaned) {
        return String::new();
    }
    let words: Vec<&str> = cleaned.split(' ').collect();
    let picked: Vec<&str> = match words.as_slice() {
        [first, second] => vec![*first, *second],
        [first, _, last] => vec![*first, *last],
        [first, ..] => vec![*first],
        [] => Vec::new(),
    };
    picked
        .iter()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn clean_display_name(name: &str) -> String {
    let mut kept = String::with_capacity(name.len());
    let mut depth = 0usize;
    for ch in name.chars() {
        match ch {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ if depth > 0 => {}
            _ if ch.is_whitespace() => kept.push(' '),
            _ if ch.is_alphanumeric() && !is_ipa_or_diacritic(ch) => kept.push(ch),
            _ => {}
        }
    }
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

const fn is_ipa_or_diacritic(ch: char) -> bool {
    matches!(ch, '\u{0250}'..='\u{036F}')
}

const fn is_unsupported(ch: char) -> bool {
    matches!(
        ch,
        '\u{1100}'..='\u{21FF}' | '\u{3000}'..='\u{ABFF}' | '\u{AC00}'..='\u{D7AF}' | '\u{F900}'..='\u{FFFF}'
    )
}

fn is_phone_number(cleaned: &str) -> bool {
    let compact: String = cleaned
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    let digits_then = |rest: &str| -> Option<usize> {
        let count = rest.chars().take_while(char::is_ascii_digit).count();
        (count > 0).then_some(count)
    };
    let Some(lead) = digits_then(&compact) else {
        return false;
    };
    let rest = &compact[lead..];
    if rest.is_empty() {
        return compact.len() > 1;
    }
    let tail = rest
        .strip_prefix("ext")
        .or_else(|| rest.strip_prefix('x'))
        .unwrap_or(rest);
    digits_then(tail).is_some_and(|count| count == tail.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Resource> {
        vec![
            Resource::new("app.title", "Ada Lovelace", "Glossa").with_translation("Glossa FR"),
            Resource::new("app.save", "Grace Brewster Hopper", "Save"),
            Resource::new("app.quit", "Alan Turing", "Quit").with_translation(""),
        ]
    }

    #[test]
    fn one_row_per_resource_in_order() {
        let resources = sample();
        let rows = resource_rows(&resources);
        assert_eq!(rows.len(), resources.len());
        let keys: Vec<&str> = rows.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(keys, vec!["app.title", "app.save", "app.quit"]);
        assert_eq!(rows[1].editor, "Grace Brewster Hopper");
    }

    #[test]
    fn secondary_text_prefers_translation() {
        let resources = sample();
        assert_eq!(secondary_text(&resources[0]), "Glossa FR");
        assert_eq!(secondary_text(&resources[1]), "Save");
        assert_eq!(secondary_text(&resources[2]), "Quit");
    }

    #[test]
    fn initials_follow_word_count_rules() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("grace brewster hopper"), "GH");
        assert_eq!(initials("Turing"), "T");
        assert_eq!(initials("A B C D"), "A");
        assert_eq!(initials("  Ada   (Countess) Lovelace "), "AL");
        assert_eq!(initials("Jean-Luc [ops] Picard"), "JP");
    }

    #[test]
    fn initials_skip_unsupported_names() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("!!!"), "");
        assert_eq!(initials("555 1234"), "");
        assert_eq!(initials("555 1234 x 12"), "");
        assert_eq!(initials("김민수"), "");
        assert_eq!(initials("7"), "7");
    }

    #[test]
    fn columns_match_grid_layout() {
        assert_eq!(RESOURCE_COLUMNS[0].field_name, "key");
        assert!(RESOURCE_COLUMNS[0].resizable);
        assert_eq!(RESOURCE_COLUMNS[1].name, "Modified By");
        assert_eq!(
            (RESOURCE_COLUMNS[1].min_width, RESOURCE_COLUMNS[1].max_width),
            (100, 150)
        );
    }
}
