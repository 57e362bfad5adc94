//! LuaSense - prefix autocompletion for the Lua scripting language
//!
//! This crate provides:
//! - Case-sensitive prefix matching over Lua keywords and standard-library
//!   identifiers (no fuzzy matching, no context awareness)
//! - Deterministic result ordering: shorter entries first, alphabetical among
//!   entries of equal length
//! - Minimum-query-length validation with a structured error
//!
//! The engine is a pure function over immutable data; one engine can be
//! queried from any number of threads concurrently.
//!
//! ```
//! use luasense::CompletionEngine;
//!
//! let engine = CompletionEngine::lua();
//! assert_eq!(engine.complete("pri").unwrap(), vec!["print"]);
//! assert!(engine.complete("a").is_err());
//! ```

pub mod engine;
pub mod vocabulary;

pub use engine::{CompletionEngine, QueryTooShortError, DEFAULT_MIN_QUERY_LEN};
pub use vocabulary::{lua_vocabulary, LUA_KEYWORDS};
