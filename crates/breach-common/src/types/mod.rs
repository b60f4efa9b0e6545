mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_from_size_is_anchored_at_origin() {
        let r = Rect::from_size(400.0, 300.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, 0.0);
        assert_eq!(r.width, 400.0);
        assert_eq!(r.height, 300.0);
        assert!(!r.is_empty());
    }

    #[test]
    fn zero_area_rect_is_empty() {
        assert!(Rect::from_size(0.0, 300.0).is_empty());
        assert!(Rect::from_size(300.0, 0.0).is_empty());
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::from_size(1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn view_id_display() {
        assert_eq!(ViewId(3).to_string(), "view-3");
    }

    #[test]
    fn orientation_serializes_lowercase() {
        let json = serde_json::to_string(&Orientation::Horizontal).unwrap();
        assert_eq!(json, "\"horizontal\"");
        let parsed: Orientation = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(parsed, Orientation::Vertical);
        assert_eq!(Orientation::Vertical.to_string(), "vertical");
    }
}
