use crate::common::uniform;
use oorandom::Rand64;
use spherefit3d::bounding_volume::{BoundingSphere, BoundingVolume, FitQuality};
use spherefit3d::fitting::minimal_bounding_sphere;
use spherefit3d::math::{Isometry, Point, Real, Vector};

fn random_sphere(rng: &mut Rand64) -> BoundingSphere {
    let center = Point::new(
        uniform(rng, -5.0, 5.0),
        uniform(rng, -5.0, 5.0),
        uniform(rng, -5.0, 5.0),
    );
    BoundingSphere::new(center, uniform(rng, 0.0, 3.0))
}

#[test]
fn predicates_are_symmetric() {
    let mut rng = Rand64::new(42);

    for _ in 0..500 {
        let a = random_sphere(&mut rng);
        let b = random_sphere(&mut rng);

        assert_eq!(a.collides(&b), b.collides(&a));
        assert_eq!(a.contacts(&b, 0.1), b.contacts(&a, 0.1));
        assert_eq!(a.intersects(&b), b.intersects(&a));
        assert_eq!(a.distance(&b), b.distance(&a));
        assert_relative_eq!(a.direction(&b), -b.direction(&a), epsilon = 1.0e-12);

        // Overlap and negative distance agree up to rounding.
        if a.distance(&b).abs() > 1.0e-9 {
            assert_eq!(a.collides(&b), a.distance(&b) < 0.0);
        }
    }
}

#[test]
fn touching_spheres_contact_without_colliding() {
    let a = BoundingSphere::new(Point::origin(), 1.0);
    let b = BoundingSphere::new(Point::new(0.0, 3.0, 0.0), 2.0);

    assert!(!a.collides(&b));
    assert!(a.contacts(&b, 1.0e-6));
    assert!(!a.contacts(&b, 0.0));
    assert_eq!(a.distance(&b), 0.0);
    assert_eq!(a.direction(&b), Vector::y());
}

#[test]
fn merged_sphere_contains_both() {
    let mut rng = Rand64::new(7);

    for _ in 0..200 {
        let a = random_sphere(&mut rng);
        let b = random_sphere(&mut rng);
        let mut m = a.merged(&b);
        m.loosen(1.0e-9);

        assert!(m.contains(&a));
        assert!(m.contains(&b));
    }
}

#[test]
fn merge_resets_the_diagnostics() {
    let points = [Point::new(0.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0)];
    let a = minimal_bounding_sphere(&points).unwrap().with_origin_id(3);
    let b = BoundingSphere::new(Point::new(5.0, 0.0, 0.0), 1.0);

    let m = a.merged(&b);
    assert_eq!(m.fit, FitQuality::NonMinimal);
    assert!(m.support_points.is_empty());
    assert_eq!(m.origin_id, None);
    assert!(m.note.is_empty());
    assert_relative_eq!(m.center, Point::new(3.0, 0.0, 0.0));
    assert_relative_eq!(m.radius, 3.0);
}

#[test]
fn transformed_supports_stay_on_the_surface() {
    let points = [
        Point::new(1.0, 1.0, 1.0),
        Point::new(1.0, -1.0, -1.0),
        Point::new(-1.0, 1.0, -1.0),
        Point::new(-1.0, -1.0, 1.0),
        Point::new(0.2, 0.1, 0.0),
    ];
    let sphere = minimal_bounding_sphere(&points).unwrap();
    let m = Isometry::new(Vector::new(1.0, -2.0, 3.0), Vector::new(0.3, 0.2, -0.1));
    let moved = sphere.transform_by(&m);

    assert_eq!(moved.radius, sphere.radius);
    assert_eq!(moved.fit, sphere.fit);
    assert_eq!(moved.support_points.len(), sphere.support_points.len());
    for support in &moved.support_points {
        assert_relative_eq!(
            na::distance(&moved.center, support),
            moved.radius,
            epsilon = 1.0e-9
        );
    }
    for pt in &points {
        assert!(moved.contains_point(&(m * pt), 1.0e-9));
    }
}

#[test]
fn display_reports_origin_and_fit() {
    let sphere = BoundingSphere::new(Point::new(1.0, 2.0, 3.0), 0.5).with_origin_id(12);
    assert_eq!(
        sphere.to_string(),
        "BoundingSphere[center: 1 2 3, radius: 0.5, origin: 12, fit: UNKNOWN]"
    );

    let r: Real = 2.0;
    let exact = minimal_bounding_sphere(&[Point::origin(), Point::new(r, 0.0, 0.0)]).unwrap();
    assert_eq!(
        exact.to_string(),
        "BoundingSphere[center: 1 0 0, radius: 1, fit: EXACT]"
    );
}
