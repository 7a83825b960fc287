mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(100.0, 50.0, 200.0, 100.0);
        assert_eq!(r.left(), 100.0);
        assert_eq!(r.right(), 300.0);
        assert_eq!(r.top(), 50.0);
        assert_eq!(r.bottom(), 150.0);
        assert_eq!(r.origin(), Point::new(100.0, 50.0));
    }

    #[test]
    fn strict_containment_excludes_every_edge() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains_strict(Point::new(50.0, 50.0)));
        assert!(!r.contains_strict(Point::new(0.0, 50.0)));
        assert!(!r.contains_strict(Point::new(100.0, 50.0)));
        assert!(!r.contains_strict(Point::new(50.0, 0.0)));
        assert!(!r.contains_strict(Point::new(50.0, 100.0)));
        assert!(!r.contains_strict(Point::new(0.0, 0.0)));
    }

    #[test]
    fn closed_containment_includes_edges() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(100.0, 100.0)));
        assert!(!r.contains(Point::new(100.5, 50.0)));
    }

    #[test]
    fn zero_sized_rect_contains_nothing_strictly() {
        let r = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert!(!r.contains_strict(Point::new(10.0, 10.0)));
    }

    #[test]
    fn zone_key_orders_host_first() {
        let mut keys = vec![ZoneKey::Zone(1), ZoneKey::Host, ZoneKey::Zone(0)];
        keys.sort();
        assert_eq!(keys, vec![ZoneKey::Host, ZoneKey::Zone(0), ZoneKey::Zone(1)]);
    }

    #[test]
    fn zone_key_display_uses_sentinel() {
        assert_eq!(ZoneKey::Host.to_string(), "-1");
        assert_eq!(ZoneKey::Zone(3).to_string(), "3");
    }

    #[test]
    fn zone_key_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&ZoneKey::Host).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&ZoneKey::Zone(2)).unwrap(), "2");
        let key: ZoneKey = serde_json::from_str("-1").unwrap();
        assert_eq!(key, ZoneKey::Host);
        assert!(serde_json::from_str::<ZoneKey>("-2").is_err());
    }

    #[test]
    fn interaction_point_constructors() {
        let t = InteractionPoint::touch(4, 1.0, 2.0);
        assert_eq!(t.identifier, Some(4));
        assert_eq!(t.position(), Point::new(1.0, 2.0));

        let c = InteractionPoint::click(3.0, 4.0);
        assert_eq!(c.identifier, None);
    }

    #[test]
    fn point_offset() {
        assert_eq!(Point::new(1.0, 2.0).offset(-1.0, 3.0), Point::new(0.0, 5.0));
    }

    #[test]
    fn color_to_hex() {
        assert_eq!(Color::rgb(255, 0, 255).to_hex(), "#ff00ff");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }
}
