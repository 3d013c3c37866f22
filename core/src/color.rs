use crate::value::{Token, TokenValue};

/// An `H S% L%` colour as written in the token file.
///
/// Hue is in degrees, saturation and lightness in percent. Nothing is
/// clamped: out-of-range components convert to whatever the arithmetic
/// gives, see [`Hsl::in_gamut`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}
impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn in_gamut(&self) -> bool {
        (0.0..360.0).contains(&self.h)
            && (0.0..=100.0).contains(&self.s)
            && (0.0..=100.0).contains(&self.l)
    }

    /// Channels in `0..=255` for in-gamut colours. Halves round up.
    pub fn to_rgb(&self) -> (i64, i64, i64) {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let h = self.h;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        // Hues outside [0, 360) fall through to black before the offset.
        let (r, g, b) = if (0.0..60.0).contains(&h) {
            (c, x, 0.0)
        } else if (60.0..120.0).contains(&h) {
            (x, c, 0.0)
        } else if (120.0..180.0).contains(&h) {
            (0.0, c, x)
        } else if (180.0..240.0).contains(&h) {
            (0.0, x, c)
        } else if (240.0..300.0).contains(&h) {
            (x, 0.0, c)
        } else if (300.0..360.0).contains(&h) {
            (c, 0.0, x)
        } else {
            (0.0, 0.0, 0.0)
        };

        let channel = |v: f64| ((v + m) * 255.0 + 0.5).floor() as i64;
        (channel(r), channel(g), channel(b))
    }

    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{}{}{}", hex_channel(r), hex_channel(g), hex_channel(b))
    }
}

// Out-of-range channels keep their sign and width, e.g. `-7f` or `17f`.
fn hex_channel(v: i64) -> String {
    if v < 0 {
        format!("-{:x}", v.unsigned_abs())
    } else {
        format!("{:02x}", v)
    }
}

/// Converts an `H S% L%` value to `#rrggbb`; any other value is returned as is.
pub fn hsl_to_hex(value: &str) -> String {
    Token::parse(value).converted()
}

/// Parses `value` and returns the colour if it is an HSL triplet.
pub fn parse_hsl(value: &str) -> Option<Hsl> {
    match Token::parse(value).value() {
        TokenValue::Hsl(hsl) => Some(*hsl),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[rstest]
    #[case("0 100% 50%", "#ff0000")]
    #[case("120 100% 50%", "#00ff00")]
    #[case("240 100% 50%", "#0000ff")]
    #[case("0 0% 0%", "#000000")]
    #[case("0 0% 100%", "#ffffff")]
    #[case("210 40% 96%", "#f1f5f9")]
    #[case("60 100% 50%", "#ffff00")]
    #[case("300 100% 50%", "#ff00ff")]
    fn converts_reference_colors(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(hsl_to_hex(input), expected);
    }

    #[rstest]
    #[case("#ff0000")]
    #[case("#FFF")]
    #[case("1.5rem")]
    #[case("Inter, sans-serif")]
    #[case("210 40.5% 96%")]
    #[case("hsl(0 100% 50%)")]
    fn passes_other_values_through(#[case] input: &str) {
        assert_eq!(hsl_to_hex(input), input);
    }

    #[test]
    fn conversion_is_idempotent() {
        let once = hsl_to_hex("200 80% 40%");
        assert_eq!(hsl_to_hex(&once), once);
    }

    #[test]
    fn hue_outside_circle_falls_back_to_offset_only() {
        assert_eq!(hsl_to_hex("360 100% 50%"), "#000000");
        assert_eq!(hsl_to_hex("400 0% 50%"), "#808080");
        assert!(!parse_hsl("360 100% 50%").unwrap().in_gamut());
    }

    #[test]
    fn out_of_range_components_are_not_clamped() {
        let hsl = parse_hsl("0 200% 50%").unwrap();
        assert!(!hsl.in_gamut());
        assert_eq!(hsl.to_rgb(), (383, -127, -127));
        assert_eq!(hsl.to_hex(), "#17f-7f-7f");
        assert!(!is_hex_color(&hsl.to_hex()));
    }

    proptest! {
        #[test]
        fn in_gamut_triplets_give_six_hex_digits(h in 0u32..360, s in 0u32..=100, l in 0u32..=100) {
            let hex = hsl_to_hex(&format!("{h} {s}% {l}%"));
            prop_assert!(is_hex_color(&hex), "{} is not #rrggbb", hex);
        }
    }
}
