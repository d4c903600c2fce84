//! Collision detection and response for axis-aligned boxes
//!
//! Everything in the world is a rectangle in screen orientation (y grows
//! downward). Overlap is strict: boxes that merely share an edge do not
//! collide, which is what lets a landed player rest exactly on a platform.

use glam::Vec2;

/// Axis-aligned bounding box (top-left position + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    #[cfg(test)]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test (touching edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// How a moving box met a static platform this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformContact {
    /// Falling onto the top surface
    Landed,
    /// Rising into the underside
    HeadBump,
    /// Anything else: pushed out sideways
    Side,
}

/// Classify a contact between a mover and a platform it already overlaps.
///
/// `vel` is the displacement just applied; subtracting it recovers where the
/// mover's edges were before this tick, which decides the contact side.
pub fn classify_contact(mover: &Aabb, vel: Vec2, platform: &Aabb) -> PlatformContact {
    if vel.y > 0.0 && mover.bottom() - vel.y <= platform.top() {
        PlatformContact::Landed
    } else if vel.y < 0.0 && mover.top() - vel.y >= platform.bottom() {
        PlatformContact::HeadBump
    } else {
        PlatformContact::Side
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        let c = Aabb::new(20.0, 0.0, 10.0, 10.0);

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let player = Aabb::new(100.0, 420.0, 30.0, 30.0);
        let ground = Aabb::new(0.0, 450.0, 2000.0, 50.0);
        assert!(!player.overlaps(&ground));

        let beside = Aabb::new(130.0, 420.0, 30.0, 30.0);
        assert!(!player.overlaps(&beside));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_classify_landing() {
        // Was at bottom 349 last tick, now 354 after falling 5
        let platform = Aabb::new(200.0, 350.0, 100.0, 20.0);
        let mover = Aabb::new(220.0, 324.0, 30.0, 30.0);
        let contact = classify_contact(&mover, Vec2::new(0.0, 5.0), &platform);
        assert_eq!(contact, PlatformContact::Landed);
    }

    #[test]
    fn test_classify_head_bump() {
        // Top was 372 (below platform bottom 370), now 366 after rising 6
        let platform = Aabb::new(200.0, 350.0, 100.0, 20.0);
        let mover = Aabb::new(220.0, 366.0, 30.0, 30.0);
        let contact = classify_contact(&mover, Vec2::new(0.0, -6.0), &platform);
        assert_eq!(contact, PlatformContact::HeadBump);
    }

    #[test]
    fn test_classify_side() {
        // Walking into the left face while level with the platform
        let platform = Aabb::new(200.0, 350.0, 100.0, 20.0);
        let mover = Aabb::new(173.0, 345.0, 30.0, 30.0);
        let contact = classify_contact(&mover, Vec2::new(5.0, 0.5), &platform);
        assert_eq!(contact, PlatformContact::Side);
    }

    fn arb_box() -> impl Strategy<Value = Aabb> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Aabb::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn disjoint_on_x_never_overlaps(a in arb_box(), gap in 0.0f32..100.0, b in arb_box()) {
            let shifted = Aabb::new(a.right() + gap, b.pos.y, b.size.x, b.size.y);
            prop_assert!(!a.overlaps(&shifted));
        }
    }
}
