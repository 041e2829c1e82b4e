//! pineapple-rs: Chinese-poker (pineapple) dealing and scoring library
//!
//! Goals:
//! - Deterministic, seedable shuffles and round-robin deals to four players
//! - Category and whole-hand special detection for Top/Middle/Bottom rows
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: deal, arrange and score a round
//! ```
//! use pineapple_rs::arrange::PolicyKind;
//! use pineapple_rs::game::{Session, TableConfig};
//!
//! let mut session = Session::new(TableConfig::new(Some(42), None, PolicyKind::Positional));
//! let (players, result) = session.play(None);
//!
//! assert_eq!(players.len(), 4);
//! for pr in result.scored() {
//!     println!("{}: {:?} {:?}", pr.name, pr.categories, pr.special);
//! }
//! ```
//!
//! ## Classify a row
//! ```
//! use pineapple_rs::cards::parse_cards;
//! use pineapple_rs::evaluator::{classify, Category};
//!
//! let bottom = parse_cards("As Ad Ah Ks Kd").unwrap();
//! assert_eq!(classify(&bottom), Category::FullHouse);
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin pineapple-rs
//! ```

pub mod arrange;
pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod special;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
