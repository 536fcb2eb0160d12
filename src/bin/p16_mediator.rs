//! Pattern 16: Mediator
//! Example: Chat room relaying messages between users
//!
//! Run with: cargo run --bin p16_mediator

use chrono::{Local, NaiveDateTime};
use std::rc::Rc;

// ============================================
// 1. Mediator
// ============================================

trait Mediator {
    fn send_message(&self, message: &str, from: &str) -> String;
}

struct ChatRoom;

impl ChatRoom {
    fn compose(timestamp: NaiveDateTime, from: &str, message: &str) -> String {
        format!(
            "[{}] {} says: {}",
            timestamp.format("%Y-%m-%d %H:%M:%S"),
            from,
            message
        )
    }
}

impl Mediator for ChatRoom {
    fn send_message(&self, message: &str, from: &str) -> String {
        Self::compose(Local::now().naive_local(), from, message)
    }
}

// ============================================
// 2. Colleagues
// ============================================

// Users never address each other directly, only the mediator
struct User {
    name: String,
    mediator: Rc<dyn Mediator>,
}

impl User {
    fn new(name: &str, mediator: Rc<dyn Mediator>) -> Self {
        User {
            name: name.to_string(),
            mediator,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn send(&self, message: &str) -> String {
        self.mediator.send_message(message, &self.name)
    }
}

fn main() {
    println!("=== Mediator Demo ===\n");

    let chat_room: Rc<dyn Mediator> = Rc::new(ChatRoom);

    let user1 = User::new("User1", Rc::clone(&chat_room));
    let user2 = User::new("User2", Rc::clone(&chat_room));

    println!("{}", user1.send("Hello, User2!"));
    println!("{}", user2.send("Hi, User1! How are you?"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_message_format() {
        assert_eq!(
            ChatRoom::compose(fixed_timestamp(), "User1", "Hello, User2!"),
            "[2024-01-15 09:30:00] User1 says: Hello, User2!"
        );
    }

    #[test]
    fn test_users_send_under_their_own_name() {
        let chat_room: Rc<dyn Mediator> = Rc::new(ChatRoom);
        let user = User::new("User2", chat_room);

        assert_eq!(user.name(), "User2");
        let line = user.send("Hi, User1! How are you?");
        assert!(line.ends_with("User2 says: Hi, User1! How are you?"));
    }

    #[test]
    fn test_colleagues_share_one_mediator() {
        struct CountingMediator(std::cell::Cell<u32>);

        impl Mediator for CountingMediator {
            fn send_message(&self, message: &str, from: &str) -> String {
                self.0.set(self.0.get() + 1);
                format!("{from}: {message}")
            }
        }

        let mediator = Rc::new(CountingMediator(std::cell::Cell::new(0)));
        let user1 = User::new("a", Rc::<CountingMediator>::clone(&mediator));
        let user2 = User::new("b", Rc::<CountingMediator>::clone(&mediator));

        user1.send("x");
        user2.send("y");

        assert_eq!(mediator.0.get(), 2);
    }
}
