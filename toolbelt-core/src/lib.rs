//! Toolbelt Core — pure transformation functions behind every tool panel.
//!
//! Each module is a standalone, stateless utility:
//! - Text case transforms and text statistics
//! - JSON formatting, minification, and structural analysis
//! - Base64 / URL percent encode-decode
//! - Hex → RGB → HSL color conversion
//! - Password generation from selectable character classes
//! - QR code rendering to a terminal-friendly string
//! - Arithmetic expression evaluation (the calculator's engine)
//! - Table-driven length unit conversion
//!
//! The only stateful type is [`calc::CalculatorState`], which owns the
//! calculator's expression buffer.

pub mod calc;
pub mod color;
pub mod encode;
pub mod json;
pub mod password;
pub mod qr;
pub mod stats;
pub mod text;
pub mod units;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all tool types are Send + Sync.
    ///
    /// The TUI keeps everything on one thread today, but nothing in this
    /// crate should ever be the reason that has to stay true.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<text::CaseAction>();
        require_sync::<text::CaseAction>();
        require_send::<stats::TextStats>();
        require_sync::<stats::TextStats>();
        require_send::<json::JsonReport>();
        require_sync::<json::JsonReport>();
        require_send::<color::Rgb>();
        require_sync::<color::Rgb>();
        require_send::<color::Hsl>();
        require_sync::<color::Hsl>();
        require_send::<password::PasswordSpec>();
        require_sync::<password::PasswordSpec>();
        require_send::<calc::CalculatorState>();
        require_sync::<calc::CalculatorState>();
        require_send::<units::LengthUnit>();
        require_sync::<units::LengthUnit>();

        // Error types
        require_send::<encode::EncodeError>();
        require_sync::<encode::EncodeError>();
        require_send::<color::ColorError>();
        require_sync::<color::ColorError>();
        require_send::<password::PasswordError>();
        require_sync::<password::PasswordError>();
        require_send::<calc::CalcError>();
        require_sync::<calc::CalcError>();
        require_send::<qr::QrError>();
        require_sync::<qr::QrError>();
        require_send::<units::UnitError>();
        require_sync::<units::UnitError>();
    }
}
