//! Interactive console front end
//!
//! Prompting with retry, table and JSON rendering, and the menu session.
//! Nothing here holds roster state; it all goes through the gradebook façade.

pub mod prompt;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use prompt::Prompter;
pub use render::Renderer;
pub use session::{resolve_test_count, MenuChoice, Session};
