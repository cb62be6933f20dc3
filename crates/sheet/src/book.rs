use crate::error::LoadError;
use crate::sheet::RawSheet;
use indexmap::IndexMap;

/// The sheets read from one workbook, keyed by sheet name (preserves load order)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Book {
    sheets: IndexMap<String, RawSheet>,
}

/// Result of loading a workbook: whatever sheets loaded, plus one error per
/// sheet that did not.
#[derive(Debug, Default)]
pub struct BookLoad {
    pub book: Book,
    pub errors: Vec<LoadError>,
}

impl Book {
    /// Create a new empty book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of sheets
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the book is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get all sheet names in order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Check if a sheet exists
    #[must_use]
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// Get a sheet by name
    #[must_use]
    pub fn get_sheet(&self, name: &str) -> Option<&RawSheet> {
        self.sheets.get(name)
    }

    /// Add a sheet under its own name, replacing any sheet of the same name
    pub fn insert_sheet(&mut self, sheet: RawSheet) {
        self.sheets.insert(sheet.name().to_string(), sheet);
    }
}

impl FromIterator<RawSheet> for Book {
    fn from_iter<I: IntoIterator<Item = RawSheet>>(iter: I) -> Self {
        let mut book = Book::new();
        for sheet in iter {
            book.insert_sheet(sheet);
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_order() {
        let book: Book = ["ENGAGEMENT", "FOLLOWERS", "DEMOGRAPHICS"]
            .into_iter()
            .map(RawSheet::with_name)
            .collect();

        assert_eq!(book.sheet_count(), 3);
        assert_eq!(book.sheet_names(), vec!["ENGAGEMENT", "FOLLOWERS", "DEMOGRAPHICS"]);
        assert!(book.has_sheet("FOLLOWERS"));
        assert!(!book.has_sheet("followers"));
        assert!(book.get_sheet("TOP POSTS").is_none());
    }
}
