//! Global -> zone-local coordinate translation.

use std::sync::Arc;

use touchrelay_common::Point;

use crate::surface::ZoneSurface;

/// Maps a global (host viewport) point into a zone's local viewport.
///
/// Evaluated on every dispatch, since zones can move between events. A custom
/// decoder fully replaces the default and is responsible for its own
/// correctness.
pub trait CoordinateDecoder: Send + Sync {
    fn decode(&self, zone: &dyn ZoneSurface, global: Point) -> Point;
}

pub type DecoderRef = Arc<dyn CoordinateDecoder>;

impl<F> CoordinateDecoder for F
where
    F: Fn(&dyn ZoneSurface, Point) -> Point + Send + Sync,
{
    fn decode(&self, zone: &dyn ZoneSurface, global: Point) -> Point {
        self(zone, global)
    }
}

/// Subtract the zone's current top-left origin.
#[derive(Debug, Default, Clone, Copy)]
pub struct OriginOffset;

impl CoordinateDecoder for OriginOffset {
    fn decode(&self, zone: &dyn ZoneSurface, global: Point) -> Point {
        let origin = zone.bounding_rect().origin();
        global.offset(-origin.x, -origin.y)
    }
}

/// Origin offset followed by division by a uniform zoom factor, for frames
/// whose content is rendered scaled.
#[derive(Debug, Clone, Copy)]
pub struct ScaledOffset {
    pub scale: f64,
}

impl CoordinateDecoder for ScaledOffset {
    fn decode(&self, zone: &dyn ZoneSurface, global: Point) -> Point {
        let local = OriginOffset.decode(zone, global);
        if self.scale == 0.0 {
            return local;
        }
        Point::new(local.x / self.scale, local.y / self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FrameZone;
    use touchrelay_common::Rect;

    #[test]
    fn origin_offset_subtracts_top_left() {
        let zone = FrameZone::new("z", Rect::new(100.0, 100.0, 300.0, 300.0));
        assert_eq!(
            OriginOffset.decode(&zone, Point::new(150.0, 160.0)),
            Point::new(50.0, 60.0)
        );
    }

    #[test]
    fn origin_offset_round_trips() {
        let zone = FrameZone::new("z", Rect::new(37.5, -12.25, 300.0, 300.0));
        for global in [
            Point::new(0.0, 0.0),
            Point::new(40.0, 10.0),
            Point::new(-3.5, 999.0),
        ] {
            let local = OriginOffset.decode(&zone, global);
            let origin = zone.bounding_rect().origin();
            assert_eq!(local.offset(origin.x, origin.y), global);
        }
    }

    #[test]
    fn origin_offset_follows_moved_zone() {
        let zone = FrameZone::new("z", Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(
            OriginOffset.decode(&zone, Point::new(50.0, 50.0)),
            Point::new(50.0, 50.0)
        );
        zone.set_bounds(Rect::new(20.0, 30.0, 100.0, 100.0));
        assert_eq!(
            OriginOffset.decode(&zone, Point::new(50.0, 50.0)),
            Point::new(30.0, 20.0)
        );
    }

    #[test]
    fn closures_are_decoders() {
        let zone = FrameZone::new("z", Rect::new(10.0, 10.0, 100.0, 100.0));
        let flip = |_: &dyn ZoneSurface, p: Point| Point::new(p.y, p.x);
        let decoder: DecoderRef = Arc::new(flip);
        assert_eq!(
            decoder.decode(&zone, Point::new(1.0, 2.0)),
            Point::new(2.0, 1.0)
        );
    }

    #[test]
    fn scaled_offset_divides_by_zoom() {
        let zone = FrameZone::new("z", Rect::new(100.0, 0.0, 400.0, 400.0));
        let decoder = ScaledOffset { scale: 2.0 };
        assert_eq!(
            decoder.decode(&zone, Point::new(200.0, 100.0)),
            Point::new(50.0, 50.0)
        );
        let degenerate = ScaledOffset { scale: 0.0 };
        assert_eq!(
            degenerate.decode(&zone, Point::new(200.0, 100.0)),
            Point::new(100.0, 100.0)
        );
    }
}
