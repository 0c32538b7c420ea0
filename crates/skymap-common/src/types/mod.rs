mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_id_display() {
        assert_eq!(LayerId(-110).to_string(), "layer-110");
        assert_eq!(LayerId(3).to_string(), "layer3");
    }

    #[test]
    fn primitive_kind_indices_are_dense() {
        for (i, kind) in PrimitiveKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn primitive_kind_display() {
        assert_eq!(PrimitiveKind::Line.to_string(), "line");
        assert_eq!(PrimitiveKind::Image.to_string(), "image");
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#56b0f578").unwrap();
        assert_eq!(c, Color::from_argb(120, 86, 176, 245));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ffé000").is_none());
    }

    #[test]
    fn color_to_hex_omits_opaque_alpha() {
        assert_eq!(Color::from_rgba(0, 212, 255, 255).to_hex(), "#00d4ff");
        assert_eq!(Color::from_rgba(0, 212, 255, 128).to_hex(), "#00d4ff80");
    }

    #[test]
    fn color_to_rgba_f32() {
        let [r, g, b, a] = Color::from_rgba(255, 0, 51, 255).to_rgba_f32();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 0.2).abs() < 1e-6);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::from_rgba(255, 136, 0, 255)).unwrap();
        assert_eq!(json, "\"#ff8800\"");
        let parsed: Color = serde_json::from_str("\"#00ff0080\"").unwrap();
        assert_eq!(parsed, Color::from_rgba(0, 255, 0, 128));
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
