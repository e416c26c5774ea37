use crate::models::{catalog, Book};

/// Case-insensitive substring search over the catalog.
///
/// Returns every book whose title, author, description, or genre contains the
/// lowercased prompt, preserving catalog order. The empty prompt matches
/// every book, since the empty string is a substring of everything; callers
/// that want to reject empty prompts do so before searching.
pub fn find_matching_books(prompt: &str) -> Vec<Book> {
    let needle = prompt.to_lowercase();
    catalog()
        .iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
                || book.description.to_lowercase().contains(&needle)
                || book.genre.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
