//! Wex colours as hex constants, one module per mode.

include!(concat!(env!("OUT_DIR"), "/wex.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_constants() {
        assert_eq!(light::PRIMARY_FOREGROUND, "#ffffff");
        assert_eq!(light::CHART_1.len(), 7);
        assert_eq!(light::PALETTE_GRAY_900.len(), 7);
        assert!(dark::PRIMARY.starts_with('#'));
        assert_ne!(light::PRIMARY, dark::PRIMARY);
    }
}
