//! Planar spawn-zone geometry.
//!
//! The restricted zone is a square centred on the spawn point: a candidate is
//! inside when both its x and z offsets are within the radius. This is a
//! per-axis test, so points on the diagonal up to `(r, r)` are restricted
//! even though their Euclidean distance exceeds `r`. The vertical axis never
//! participates.

/// Horizontal location inside a single world.
///
/// The world a point belongs to is carried by the request that contains it;
/// every request and every actor list handed to the core is already scoped to
/// one world.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpatialPoint {
    pub x: f64,
    pub z: f64,
}

impl SpatialPoint {
    pub const ORIGIN: Self = Self { x: 0.0, z: 0.0 };

    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

/// A single zone test: is `candidate` within `radius` of `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneQuery {
    pub center: SpatialPoint,
    pub candidate: SpatialPoint,
    pub radius: i32,
}

impl ZoneQuery {
    pub const fn new(center: SpatialPoint, candidate: SpatialPoint, radius: i32) -> Self {
        Self {
            center,
            candidate,
            radius,
        }
    }

    pub fn is_restricted(&self) -> bool {
        is_restricted(self.center, self.candidate, self.radius)
    }
}

/// Returns true when `candidate` lies in the square of half-width `radius`
/// around `center`. A negative radius restricts nothing.
#[inline]
pub fn is_restricted(center: SpatialPoint, candidate: SpatialPoint, radius: i32) -> bool {
    let radius = f64::from(radius);
    (center.x - candidate.x).abs() <= radius && (center.z - candidate.z).abs() <= radius
}

/// Anything with a horizontal position that proximity filters can test.
pub trait Located {
    fn location(&self) -> SpatialPoint;
}

impl Located for SpatialPoint {
    fn location(&self) -> SpatialPoint {
        *self
    }
}

/// Yields the items whose location is within `proximity` of `point`, using the
/// same square test as the spawn zone. Input order is preserved.
pub fn within_proximity<'a, T: Located>(
    items: &'a [T],
    point: SpatialPoint,
    proximity: i32,
) -> impl Iterator<Item = &'a T> + 'a {
    items
        .iter()
        .filter(move |item| is_restricted(item.location(), point, proximity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SPAWN: SpatialPoint = SpatialPoint::ORIGIN;

    #[test]
    fn edge_of_square_is_restricted() {
        assert!(is_restricted(SPAWN, SpatialPoint::new(50.0, 0.0), 50));
        assert!(!is_restricted(SPAWN, SpatialPoint::new(51.0, 0.0), 50));
    }

    #[test]
    fn diagonal_corner_is_restricted() {
        // Euclidean distance is ~70.7, still inside the square.
        assert!(is_restricted(SPAWN, SpatialPoint::new(50.0, 50.0), 50));
        assert!(is_restricted(SPAWN, SpatialPoint::new(-50.0, 50.0), 50));
        assert!(!is_restricted(SPAWN, SpatialPoint::new(50.0, 50.5), 50));
    }

    #[test]
    fn fractional_offsets_are_compared_exactly() {
        assert!(is_restricted(SPAWN, SpatialPoint::new(9.999, -10.0), 10));
        assert!(!is_restricted(SPAWN, SpatialPoint::new(10.001, 0.0), 10));
    }

    #[test]
    fn zero_radius_only_matches_center() {
        assert!(is_restricted(SPAWN, SPAWN, 0));
        assert!(!is_restricted(SPAWN, SpatialPoint::new(0.5, 0.0), 0));
    }

    #[test]
    fn negative_radius_restricts_nothing() {
        assert!(!is_restricted(SPAWN, SPAWN, -1));
    }

    #[test]
    fn query_delegates_to_predicate() {
        let query = ZoneQuery::new(
            SpatialPoint::new(100.0, 100.0),
            SpatialPoint::new(40.0, 160.0),
            60,
        );
        assert!(query.is_restricted());
    }

    #[test]
    fn proximity_filter_keeps_order() {
        let points = [
            SpatialPoint::new(3.0, 3.0),
            SpatialPoint::new(6.0, 0.0),
            SpatialPoint::new(-5.0, -5.0),
        ];
        let near: Vec<_> = within_proximity(&points, SPAWN, 5).copied().collect();
        assert_eq!(near, vec![points[0], points[2]]);
    }

    proptest! {
        #[test]
        fn predicate_is_deterministic(
            cx in -1.0e6f64..1.0e6, cz in -1.0e6f64..1.0e6,
            px in -1.0e6f64..1.0e6, pz in -1.0e6f64..1.0e6,
            radius in 0i32..100_000,
        ) {
            let center = SpatialPoint::new(cx, cz);
            let candidate = SpatialPoint::new(px, pz);
            prop_assert_eq!(
                is_restricted(center, candidate, radius),
                is_restricted(center, candidate, radius)
            );
        }

        #[test]
        fn predicate_is_symmetric(
            cx in -1.0e4f64..1.0e4, cz in -1.0e4f64..1.0e4,
            px in -1.0e4f64..1.0e4, pz in -1.0e4f64..1.0e4,
            radius in 0i32..10_000,
        ) {
            let a = SpatialPoint::new(cx, cz);
            let b = SpatialPoint::new(px, pz);
            prop_assert_eq!(is_restricted(a, b, radius), is_restricted(b, a, radius));
        }

        #[test]
        fn square_corners_are_inside(radius in 0i32..10_000, sx in -1i32..=1, sz in -1i32..=1) {
            let corner = SpatialPoint::new(f64::from(radius * sx), f64::from(radius * sz));
            prop_assert!(is_restricted(SPAWN, corner, radius));
        }
    }
}
