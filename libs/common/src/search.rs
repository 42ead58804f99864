//! Case-insensitive substring search over a fixed set of text fields

use crate::models::{Store, User};

/// Something that can be matched by a free-text query
pub trait Searchable {
    /// The text fields a query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// `needle` must already be lowercase
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.address.as_str(),
            self.role.as_str(),
        ]
    }
}

impl Searchable for Store {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.address.as_str(),
            self.description.as_str(),
        ]
    }
}

/// Keep the items matching `query`, in their original order.
/// A blank query keeps everything.
pub fn filter<'a, T, I>(items: I, query: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.into_iter().collect();
    }

    items
        .into_iter()
        .filter(|item| item.matches(&needle))
        .collect()
}
