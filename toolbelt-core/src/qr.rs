//! QR code rendering — delegates encoding to the qrcode crate and renders
//! to a unicode-block string suitable for a terminal.

use qrcode::render::unicode;
use qrcode::QrCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("enter some text to encode")]
    EmptyInput,
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

/// Render `text` as a QR code drawn with half-height block characters.
///
/// `quiet_zone` adds the standard light margin around the symbol.
pub fn render(text: &str, quiet_zone: bool) -> Result<String, QrError> {
    if text.trim().is_empty() {
        return Err(QrError::EmptyInput);
    }
    let code = QrCode::new(text.as_bytes())?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .quiet_zone(quiet_zone)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_non_empty_output() {
        let art = render("https://example.com", true).unwrap();
        assert!(!art.is_empty());
        assert!(art.lines().count() > 10);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(render("", true), Err(QrError::EmptyInput)));
        assert!(matches!(render("   ", true), Err(QrError::EmptyInput)));
    }

    #[test]
    fn oversized_input_surfaces_encoder_error() {
        // Well past the byte-mode capacity of the largest QR version.
        let huge = "x".repeat(8000);
        assert!(matches!(render(&huge, true), Err(QrError::Encode(_))));
    }

    #[test]
    fn quiet_zone_widens_the_symbol() {
        let with = render("margin", true).unwrap();
        let without = render("margin", false).unwrap();
        assert!(with.lines().count() > without.lines().count());
    }
}
