/// Custom properties for every Wex token, `:root` for light and `.dark` for dark.
pub const WEX_CSS: &str = include_str!(concat!(env!("OUT_DIR"), "/wex.css"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_covers_both_modes() {
        assert!(WEX_CSS.starts_with(":root {"));
        assert!(WEX_CSS.contains("--wex-font-sans: Inter, system-ui, sans-serif;"));
        assert!(WEX_CSS.contains(".dark {\n  --wex-background: 222 47% 11%;"));
    }
}
