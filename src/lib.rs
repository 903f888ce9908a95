//! # Date Idea Bot
//!
//! A Telegram bot that suggests a random date idea at the press of a button.
//!
//! ## Features
//! - Welcome message with a persistent reply keyboard
//! - Random date ideas, with a picture when one is available
//! - Contact button for ordering a custom bot
//! - Persistent storage of users and ideas with SQLite

/// Bot commands, keyboards, reply texts and message handlers
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, migrations and seed data
pub mod database;
/// Idea selection and the health endpoint
pub mod services;
/// Logging setup and helpers
pub mod utils;
