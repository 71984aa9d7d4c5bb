//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`Focus`] - Which UI component has focus
//! - [`RegionPicker`] - Region dropdown state

use crate::models::{Region, RegionOption};

/// Represents which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Dashboard,
    RegionPicker,
}

/// Region dropdown state (r or Enter to open)
///
/// Filtering runs against the dropdown list the caller passes in, so the
/// picker never holds a stale copy of the options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionPicker {
    /// Type-to-filter query
    pub query: String,
    /// Selected index into the filtered list
    pub selected_index: usize,
    /// First visible row of the filtered list
    pub scroll_offset: usize,
}

impl RegionPicker {
    /// Clear the query and selection
    pub fn reset(&mut self) {
        self.query.clear();
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Options whose name or ISO code contains the query, case-insensitively.
    pub fn filtered<'a>(&self, options: &'a [RegionOption]) -> Vec<&'a RegionOption> {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return options.iter().collect();
        }
        options
            .iter()
            .filter(|option| {
                option.display_name.to_lowercase().contains(&needle)
                    || option.iso_code.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn backspace(&mut self) {
        self.query.pop();
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move down within a list of `len` visible entries.
    pub fn move_down(&mut self, len: usize) {
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside a window of `visible` rows.
    pub fn ensure_visible(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible {
            self.scroll_offset = self.selected_index + 1 - visible;
        }
    }

    /// The region under the cursor, if the filtered list is non-empty.
    pub fn confirm(&self, options: &[RegionOption]) -> Option<Region> {
        self.filtered(options)
            .get(self.selected_index)
            .map(|option| option.region())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<RegionOption> {
        vec![
            RegionOption::worldwide(),
            RegionOption {
                display_name: "France".to_string(),
                iso_code: "FR".to_string(),
            },
            RegionOption {
                display_name: "French Polynesia".to_string(),
                iso_code: "PF".to_string(),
            },
            RegionOption {
                display_name: "Italy".to_string(),
                iso_code: "IT".to_string(),
            },
        ]
    }

    #[test]
    fn test_focus_default() {
        assert_eq!(Focus::default(), Focus::Dashboard);
    }

    #[test]
    fn test_empty_query_lists_everything() {
        let picker = RegionPicker::default();
        assert_eq!(picker.filtered(&options()).len(), 4);
        assert_eq!(picker.confirm(&options()), Some(Region::Worldwide));
    }

    #[test]
    fn test_filter_by_name_and_code() {
        let opts = options();
        let mut picker = RegionPicker::default();
        for c in "fr".chars() {
            picker.push_char(c);
        }
        let codes: Vec<_> = picker
            .filtered(&opts)
            .iter()
            .map(|o| o.iso_code.as_str())
            .collect();
        assert_eq!(codes, vec!["FR", "PF"]);

        picker.push_char('e');
        let codes: Vec<_> = picker
            .filtered(&opts)
            .iter()
            .map(|o| o.iso_code.as_str())
            .collect();
        assert_eq!(codes, vec!["PF"]);

        picker.reset();
        picker.push_char('p');
        picker.push_char('f');
        assert_eq!(picker.confirm(&opts), Some(Region::Country("PF".to_string())));

        picker.reset();
        picker.push_char('i');
        picker.push_char('t');
        assert_eq!(picker.confirm(&options()), Some(Region::Country("IT".to_string())));
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut picker = RegionPicker::default();
        picker.move_up();
        assert_eq!(picker.selected_index, 0);
        for _ in 0..10 {
            picker.move_down(4);
        }
        assert_eq!(picker.selected_index, 3);
        assert_eq!(picker.confirm(&options()), Some(Region::Country("IT".to_string())));
    }

    #[test]
    fn test_typing_resets_selection() {
        let mut picker = RegionPicker::default();
        picker.move_down(4);
        picker.push_char('x');
        assert_eq!(picker.selected_index, 0);
        assert_eq!(picker.confirm(&options()), None);
        picker.backspace();
        assert_eq!(picker.query, "");
    }

    #[test]
    fn test_ensure_visible_scrolls() {
        let mut picker = RegionPicker::default();
        picker.selected_index = 5;
        picker.ensure_visible(3);
        assert_eq!(picker.scroll_offset, 3);
        picker.selected_index = 1;
        picker.ensure_visible(3);
        assert_eq!(picker.scroll_offset, 1);
    }
}
