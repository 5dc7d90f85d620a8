use oorandom::Rand64;
use spherefit3d::bounding_volume::BoundingSphere;
use spherefit3d::math::{Point, Real, Vector};

/// A point set generator driven by a seeded random number generator.
pub type CloudGen = fn(&mut Rand64, usize) -> Vec<Point<Real>>;

pub fn uniform(rng: &mut Rand64, lo: Real, hi: Real) -> Real {
    lo + (hi - lo) * rng.rand_float()
}

pub fn cube_cloud(rng: &mut Rand64, n: usize) -> Vec<Point<Real>> {
    (0..n)
        .map(|_| {
            Point::new(
                uniform(rng, -10.0, 10.0),
                uniform(rng, -10.0, 10.0),
                uniform(rng, -10.0, 10.0),
            )
        })
        .collect()
}

pub fn planar_cloud(rng: &mut Rand64, n: usize) -> Vec<Point<Real>> {
    (0..n)
        .map(|_| Point::new(uniform(rng, -10.0, 10.0), uniform(rng, -10.0, 10.0), 0.0))
        .collect()
}

pub fn collinear_cloud(rng: &mut Rand64, n: usize) -> Vec<Point<Real>> {
    let dir = Vector::new(1.0, 2.0, -0.5);
    (0..n)
        .map(|_| Point::from(dir * uniform(rng, -5.0, 5.0)))
        .collect()
}

/// Few distinct points, each repeated several times.
pub fn duplicated_cloud(rng: &mut Rand64, n: usize) -> Vec<Point<Real>> {
    let distinct = cube_cloud(rng, (n / 3).max(2));
    (0..n)
        .map(|_| distinct[rng.rand_range(0..distinct.len() as u64) as usize])
        .collect()
}

/// Points on the sphere of radius 5 centered at `(1, 1, 1)`.
pub fn spherical_cloud(rng: &mut Rand64, n: usize) -> Vec<Point<Real>> {
    let center = Point::new(1.0, 1.0, 1.0);
    let mut pts = Vec::with_capacity(n);

    while pts.len() < n {
        let dir = Vector::new(
            uniform(rng, -1.0, 1.0),
            uniform(rng, -1.0, 1.0),
            uniform(rng, -1.0, 1.0),
        );
        let sqnorm = dir.norm_squared();

        if sqnorm > 1.0e-2 && sqnorm <= 1.0 {
            pts.push(center + dir.normalize() * 5.0);
        }
    }

    pts
}

pub const SIZES: [usize; 8] = [2, 3, 4, 5, 8, 20, 100, 400];

pub fn well_conditioned_generators() -> [(&'static str, CloudGen); 4] {
    [
        ("cube", cube_cloud as CloudGen),
        ("planar", planar_cloud as CloudGen),
        ("collinear", collinear_cloud as CloudGen),
        ("duplicated", duplicated_cloud as CloudGen),
    ]
}

/// Calls `f` on a variety of seeded random clouds of each generator.
pub fn for_each_cloud(
    generators: &[(&'static str, CloudGen)],
    runs: u128,
    mut f: impl FnMut(&str, &mut Rand64, &[Point<Real>]),
) {
    for (name, gen) in generators {
        for seed in 0..runs {
            let mut rng = Rand64::new(seed);
            let n = SIZES[rng.rand_range(0..SIZES.len() as u64) as usize];
            let points = gen(&mut rng, n);
            f(name, &mut rng, &points);
        }
    }
}

/// Checks every point lies inside of `sphere`, up to a small relative tolerance.
pub fn assert_encloses(name: &str, sphere: &BoundingSphere, points: &[Point<Real>]) {
    for pt in points {
        let dist = na::distance(&sphere.center, pt);
        assert!(
            dist <= sphere.radius * (1.0 + 1.0e-9) + 1.0e-12,
            "{}: {:?} is outside of {} (distance {})",
            name,
            pt,
            sphere,
            dist
        );
    }
}

/// Compares the results of two solves, ignoring the solver time.
pub fn assert_same_result(a: &BoundingSphere, b: &BoundingSphere) {
    assert_eq!(a.center, b.center);
    assert_eq!(a.radius, b.radius);
    assert_eq!(a.fit, b.fit);
    assert_eq!(a.support_points, b.support_points);
    assert_eq!(a.passes, b.passes);
    assert_eq!(a.error, b.error);
}
