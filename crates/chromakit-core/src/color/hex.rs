//! Hex notation and 8-bit channel access.

use std::str::FromStr;

use super::Color;
use crate::decimal::Decimal;
use crate::error::ColorError;

fn channel_byte(channel: &Decimal) -> u8 {
    let scaled = (channel * 255).round(0);
    match scaled.to_i64() {
        Some(value) => value.clamp(0, 255) as u8,
        None if scaled.is_negative() => 0,
        None => u8::MAX,
    }
}

impl Color {
    /// Parse an sRGB color from hex notation.
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`, with or without
    /// the hash. Parsing is case-insensitive and surrounding whitespace is
    /// trimmed. Channels are stored as exact fractions of 255.
    ///
    /// ```
    /// use chromakit_core::Color;
    ///
    /// let orange = Color::from_hex("#ff8800").unwrap();
    /// assert_eq!(orange.rgb_hex().unwrap(), "#ff8800");
    ///
    /// let red = Color::from_hex("F00").unwrap();
    /// assert_eq!(red.rgb_array().unwrap(), [255, 0, 0]);
    /// ```
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHex`] for any other length or a non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let bytes: Vec<u8> = match digits.len() {
            // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
            3 | 4 => digits
                .chars()
                .map(|c| c.to_digit(16).map(|d| d as u8 * 17))
                .collect::<Option<_>>()
                .ok_or_else(invalid)?,
            6 | 8 => (0..digits.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&digits[i..i + 2], 16))
                .collect::<Result<_, _>>()
                .map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        let fraction = |byte: u8| Decimal::from_rational(i64::from(byte), 255);
        let coordinates = bytes[..3]
            .iter()
            .map(|&byte| fraction(byte))
            .collect::<Result<Vec<_>, _>>()?;
        let alpha = match bytes.get(3) {
            Some(&byte) => fraction(byte)?,
            None => Decimal::one(),
        };
        Color::in_space(crate::space::SRGB, coordinates, alpha)
    }

    /// sRGB channels as bytes, rounded and clamped to `0..=255`.
    ///
    /// # Errors
    ///
    /// Whatever the conversion to sRGB reports.
    pub fn rgb_array(&self) -> Result<[u8; 3], ColorError> {
        let srgb = self.to_srgb()?;
        match srgb.coordinates() {
            [r, g, b] => Ok([channel_byte(r), channel_byte(g), channel_byte(b)]),
            other => Err(ColorError::CoordinateArityMismatch {
                space: srgb.color_space().name().to_string(),
                expected: 3,
                actual: other.len(),
            }),
        }
    }

    /// `#rrggbb` in lowercase. Alpha is not included.
    ///
    /// # Errors
    ///
    /// Whatever the conversion to sRGB reports.
    pub fn rgb_hex(&self) -> Result<String, ColorError> {
        let [r, g, b] = self.rgb_array()?;
        Ok(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    /// Alpha as a byte, rounded and clamped to `0..=255`.
    pub fn alpha_byte(&self) -> u8 {
        channel_byte(self.alpha())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse hex notation; see [`Color::from_hex`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formats() {
        let full = Color::from_hex("#FF8800").unwrap();
        assert_eq!(full.rgb_array().unwrap(), [255, 136, 0]);
        assert_eq!(Color::from_hex("ff8800").unwrap(), full);
        assert_eq!(Color::from_hex("  #f80  ").unwrap(), full);

        let translucent = Color::from_hex("#ff880080").unwrap();
        assert_eq!(translucent.alpha(), &Decimal::from_rational(128, 255).unwrap());
        assert_eq!(translucent.alpha_byte(), 128);

        let short_alpha = Color::from_hex("#f808").unwrap();
        assert_eq!(short_alpha.alpha_byte(), 0x88);
    }

    #[test]
    fn test_hex_channels_are_exact() {
        let color = Color::from_hex("#808080").unwrap();
        assert!(color.coordinates()[0].is_exact());
        assert_eq!(color.coordinates()[0], Decimal::from_rational(128, 255).unwrap());
        assert_eq!(color.to_string(), "srgb(0.502, 0.502, 0.502)");
    }

    #[test]
    fn test_invalid_hex() {
        for bad in ["", "#", "#12", "#12345", "#1234567", "#gggggg", "#ff88zz", "#ff8800ff00", "#ффф"] {
            assert_eq!(
                Color::from_hex(bad),
                Err(ColorError::InvalidHex(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_byte_rounding_and_clamping() {
        let color = Color::from_rgb(1.2, -0.1, 0.5).unwrap();
        assert_eq!(color.rgb_array().unwrap(), [255, 0, 128]);
        assert_eq!(color.rgb_hex().unwrap(), "#ff0080");
    }

    #[test]
    fn test_hex_round_trip_through_oklab() {
        for hex in ["#000000", "#ffffff", "#ff8800", "#3366cc", "#7f7f7f"] {
            let color = Color::from_hex(hex).unwrap();
            let back = color.to_oklab().unwrap();
            assert_eq!(back.rgb_hex().unwrap(), hex);
        }
    }

    #[test]
    fn test_from_str_is_hex() {
        let parsed: Color = "#00ff00".parse().unwrap();
        assert_eq!(parsed.rgb_array().unwrap(), [0, 255, 0]);
    }
}
