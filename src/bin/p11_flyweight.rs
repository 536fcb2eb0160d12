//! Pattern 11: Flyweight
//! Example: One shared glyph per distinct character
//!
//! Run with: cargo run --bin p11_flyweight

use rand::Rng;
use std::collections::HashMap;
use std::rc::Rc;

// ============================================
// 1. Flyweight
// ============================================

struct CharacterFlyweight {
    // Intrinsic state, shared by every use of this character
    ch: char,
}

impl CharacterFlyweight {
    fn new(ch: char) -> Self {
        CharacterFlyweight { ch }
    }

    // The font is extrinsic state, supplied per call
    fn render(&self, font: &str) -> String {
        format!("Character '{}' with font '{}'", self.ch, font)
    }
}

// ============================================
// 2. Flyweight factory
// ============================================

struct CharacterFactory {
    characters: HashMap<char, Rc<CharacterFlyweight>>,
}

impl CharacterFactory {
    fn new() -> Self {
        CharacterFactory {
            characters: HashMap::new(),
        }
    }

    // Creates on first request, hands out the shared instance afterwards
    fn character(&mut self, ch: char) -> Rc<CharacterFlyweight> {
        Rc::clone(
            self.characters
                .entry(ch)
                .or_insert_with(|| Rc::new(CharacterFlyweight::new(ch))),
        )
    }

    fn created(&self) -> usize {
        self.characters.len()
    }
}

fn main() {
    println!("=== Flyweight Demo ===\n");

    let mut factory = CharacterFactory::new();
    let mut rng = rand::thread_rng();

    let text = "Hello world!";
    for ch in text.chars() {
        let glyph = factory.character(ch);
        let font = rng.gen_range(1..=3);
        println!("{}", glyph.render(&format!("Font{font}")));
    }

    println!(
        "\n{} characters rendered, {} glyphs created",
        text.chars().count(),
        factory.created()
    );
}
