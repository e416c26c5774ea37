use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
}

impl Book {
    fn new(title: &str, author: &str, description: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            genre: genre.to_string(),
        }
    }
}

static CATALOG: Lazy<Vec<Book>> = Lazy::new(|| {
    vec![
        Book::new(
            "To Kill a Mockingbird",
            "Harper Lee",
            "A story of racial injustice and the loss of innocence in the American South.",
            "Fiction",
        ),
        Book::new(
            "1984",
            "George Orwell",
            "A dystopian novel about totalitarianism and surveillance.",
            "Science Fiction",
        ),
        Book::new(
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "A story of wealth, love, and the American Dream in the 1920s.",
            "Fiction",
        ),
        Book::new(
            "Pride and Prejudice",
            "Jane Austen",
            "A romantic novel about the Bennet family and their relationships.",
            "Romance",
        ),
        Book::new(
            "The Hobbit",
            "J.R.R. Tolkien",
            "A fantasy adventure about a hobbit's journey to reclaim treasure.",
            "Fantasy",
        ),
    ]
});

/// The fixed in-memory catalog. Built once, never mutated.
pub fn catalog() -> &'static [Book] {
    &CATALOG
}
