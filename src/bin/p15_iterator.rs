//! Pattern 15: Iterator
//! Example: Walking a book collection without exposing its storage
//!
//! Run with: cargo run --bin p15_iterator

// ============================================
// 1. Concrete iterator
// ============================================

struct BookIterator {
    books: Vec<String>,
    position: usize,
}

impl BookIterator {
    fn new(books: Vec<String>) -> Self {
        BookIterator { books, position: 0 }
    }

    fn has_next(&self) -> bool {
        self.position < self.books.len()
    }

    fn current(&self) -> Option<&str> {
        self.books.get(self.position).map(String::as_str)
    }
}

// The classic protocol maps straight onto the standard trait
impl Iterator for BookIterator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let book = self.books.get(self.position).cloned()?;
        self.position += 1;
        Some(book)
    }
}

// ============================================
// 2. Aggregate
// ============================================

trait BookCollection {
    fn create_iterator(&self) -> BookIterator;
}

struct ArrayBookCollection {
    books: Vec<String>,
}

impl ArrayBookCollection {
    fn new(books: Vec<String>) -> Self {
        ArrayBookCollection { books }
    }
}

impl BookCollection for ArrayBookCollection {
    fn create_iterator(&self) -> BookIterator {
        BookIterator::new(self.books.clone())
    }
}

fn shelf() -> Vec<String> {
    [
        "Design Patterns: Elements of Reusable Object-Oriented Software",
        "Clean Code: A Handbook of Agile Software Craftsmanship",
        "The Pragmatic Programmer: Your Journey to Mastery",
        "Refactoring: Improving the Design of Existing Code",
    ]
    .map(String::from)
    .to_vec()
}

fn main() {
    println!("=== Iterator Demo ===\n");

    let collection = ArrayBookCollection::new(shelf());

    println!("Iterating over books:");
    let mut iterator = collection.create_iterator();
    while iterator.has_next() {
        if let Some(book) = iterator.current() {
            println!("{book}");
        }
        iterator.next();
    }

    // Same traversal through the standard trait
    println!("\nIterating again with a for loop:");
    for book in collection.create_iterator() {
        println!("{book}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traverses_in_collection_order() {
        let collection = ArrayBookCollection::new(shelf());
        let books: Vec<String> = collection.create_iterator().collect();

        assert_eq!(books, shelf());
    }

    #[test]
    fn test_manual_protocol_matches_the_standard_trait() {
        let collection = ArrayBookCollection::new(shelf());

        let mut manual = Vec::new();
        let mut iterator = collection.create_iterator();
        while iterator.has_next() {
            manual.push(iterator.current().map(str::to_string));
            iterator.next();
        }

        let via_trait: Vec<Option<String>> =
            collection.create_iterator().map(Some).collect();
        assert_eq!(manual, via_trait);
    }

    #[test]
    fn test_exhausted_iterator_stays_exhausted() {
        let mut iterator = BookIterator::new(vec!["only one".to_string()]);

        assert_eq!(iterator.next(), Some("only one".to_string()));
        assert!(!iterator.has_next());
        assert_eq!(iterator.current(), None);
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[test]
    fn test_empty_collection_yields_nothing() {
        let collection = ArrayBookCollection::new(Vec::new());
        let mut iterator = collection.create_iterator();

        assert!(!iterator.has_next());
        assert_eq!(iterator.next(), None);
    }
}
