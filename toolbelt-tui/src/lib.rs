//! Toolbelt TUI — one panel per micro-utility, with a toast/confirm
//! overlay service drawn on top.
//!
//! Panels:
//! 1. Text — case transforms
//! 2. Stats — live character/word/line counts
//! 3. JSON — format, minify, analyze
//! 4. Encode — base64 and URL percent encoding
//! 5. Color — hex → RGB → HSL
//! 6. Password — class-based generation
//! 7. QR — unicode-block rendering
//! 8. Calc — keypad calculator
//! 9. Units — length conversion
//! 0. Help — key bindings

pub mod app;
pub mod config;
pub mod input;
pub mod overlay;
pub mod theme;
pub mod ui;

pub use app::{AppState, Panel};
pub use overlay::Overlays;
