pub mod health;
pub mod idea_selector;
