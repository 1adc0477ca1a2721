use solidgen3d::math::{Point, Real, Vector};
use solidgen3d::shape::{
    Capsule, Cone, Cuboid, Cylinder, GeometryBuffer, InvalidParameterError, Plane, ShapeGenerator,
    ShapeParams, ShapeType, Sphere,
};

fn rand_range(rng: &mut oorandom::Rand32, min: Real, max: Real) -> Real {
    min + (max - min) * rng.rand_float() as Real
}

fn rand_point(rng: &mut oorandom::Rand32) -> Point<Real> {
    Point::new(
        rand_range(rng, -10.0, 10.0),
        rand_range(rng, -10.0, 10.0),
        rand_range(rng, -10.0, 10.0),
    )
}

fn rand_shape(rng: &mut oorandom::Rand32) -> ShapeParams {
    let center = rand_point(rng);
    let segments = rng.rand_range(3..40);
    let rings = rng.rand_range(2..20);

    match rng.rand_range(0..6) {
        0 => Cuboid::new(
            center,
            rand_range(rng, 0.01, 5.0),
            rand_range(rng, 0.01, 5.0),
            rand_range(rng, 0.01, 5.0),
        )
        .into(),
        1 => Sphere::with_subdivisions(center, rand_range(rng, 0.01, 5.0), segments, rings).into(),
        2 => Cylinder::with_segments(
            center,
            rand_range(rng, 0.01, 5.0),
            rand_range(rng, 0.01, 5.0),
            segments,
        )
        .into(),
        3 => Cone::with_segments(
            center,
            rand_range(rng, 0.01, 5.0),
            rand_range(rng, 0.01, 5.0),
            segments,
        )
        .into(),
        4 => Capsule::with_subdivisions(
            center,
            rand_range(rng, 0.01, 2.0),
            rand_range(rng, 0.01, 8.0),
            segments,
            rings,
        )
        .into(),
        _ => Plane::new(
            center,
            Vector::new(
                rand_range(rng, -1.0, 1.0),
                rand_range(rng, -1.0, 1.0),
                rand_range(rng, -1.0, 1.0),
            ) + Vector::repeat(0.01),
            rand_range(rng, 0.01, 20.0),
        )
        .into(),
    }
}

fn assert_well_formed(shape_type: ShapeType, buffer: &GeometryBuffer) {
    assert!(!buffer.positions().is_empty());
    assert_eq!(buffer.positions().len(), buffer.normals().len());
    assert!(buffer.tex_coords().is_none());

    for face in buffer.faces() {
        for i in face {
            assert!((*i as usize) < buffer.positions().len());
        }
    }

    // The normal at the apex of a cone only has its vertical component.
    let skip = if shape_type == ShapeType::Cone { 1 } else { 0 };

    for n in &buffer.normals()[skip..] {
        assert_relative_eq!(n.norm(), 1.0, epsilon = 1.0e-4);
    }

    let wire = buffer.to_wire();
    assert_eq!(wire.positions.len(), buffer.num_vertices() * 3);
    assert_eq!(wire.normals.len(), buffer.num_vertices() * 3);
    assert_eq!(wire.indices.len(), buffer.num_triangles() * 3);
}

#[test]
fn random_shapes_are_well_formed_and_deterministic() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..200 {
        let shape = rand_shape(&mut rng);
        let buffer = shape
            .generate()
            .unwrap_or_else(|e| panic!("{shape:?} failed to generate: {e}"));
        assert_well_formed(shape.shape_type(), &buffer);
        assert_eq!(shape.generate().unwrap(), buffer);
    }
}

#[test]
fn unit_box() {
    let buffer = Cuboid::new(Point::origin(), 1.0, 1.0, 1.0)
        .generate()
        .unwrap();
    let axes = [
        Vector::x(),
        -Vector::x(),
        Vector::y(),
        -Vector::y(),
        Vector::z(),
        -Vector::z(),
    ];

    assert_eq!(buffer.num_vertices(), 24);
    assert_eq!(buffer.to_wire().indices.len(), 36);
    assert!(buffer.normals().iter().all(|n| axes.contains(n)));

    for pt in buffer.positions() {
        assert!(pt.iter().all(|e| e.abs() == 0.5));
    }
}

#[test]
fn unit_sphere_vertices_lie_on_the_sphere() {
    let buffer = Sphere::new(Point::origin(), 1.0).generate().unwrap();

    for pt in buffer.positions() {
        assert_relative_eq!(pt.coords.norm(), 1.0, epsilon = 1.0e-5);
    }
}

#[test]
fn cylinder_and_cone_stay_within_their_height() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..50 {
        let center = rand_point(&mut rng);
        let radius = rand_range(&mut rng, 0.1, 3.0);
        let height = rand_range(&mut rng, 0.1, 3.0);
        let segments = rng.rand_range(3..64);

        let cylinder = Cylinder::with_segments(center, radius, height, segments);
        for pt in cylinder.generate().unwrap().positions() {
            let local_y = pt.y - center.y;
            assert!(local_y >= -height / 2.0 - 1.0e-4 && local_y <= height / 2.0 + 1.0e-4);
        }

        let cone = Cone::with_segments(center, radius, height, segments);
        for pt in cone.generate().unwrap().positions() {
            let local_y = pt.y - center.y;
            assert!(local_y >= -1.0e-4 && local_y <= height + 1.0e-4);
        }
    }
}

#[test]
fn capsule_is_bounded_by_its_height() {
    let capsule = Capsule::new(Point::new(0.0, 5.0, 0.0), 0.5, 3.0);
    let aabb = capsule.generate().unwrap().local_aabb().unwrap();

    assert_relative_eq!(aabb.mins.y, 3.5, epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs.y, 6.5, epsilon = 1.0e-5);
    assert_relative_eq!(aabb.half_extents().x, 0.5, epsilon = 1.0e-5);
}

#[test]
fn invalid_parameters_are_rejected() {
    let origin = Point::origin();

    assert_eq!(
        Cuboid::new(origin, -1.0, 1.0, 1.0).generate(),
        Err(InvalidParameterError::NonPositive {
            parameter: "width",
            value: -1.0
        })
    );
    assert_eq!(
        Sphere::new(origin, 0.0).generate(),
        Err(InvalidParameterError::NonPositive {
            parameter: "radius",
            value: 0.0
        })
    );
    assert_eq!(
        Cylinder::with_segments(origin, 1.0, 1.0, 2).generate(),
        Err(InvalidParameterError::TooFewSegments(2))
    );
    assert_eq!(
        Cone::new(origin, 1.0, -2.0).generate(),
        Err(InvalidParameterError::NonPositive {
            parameter: "height",
            value: -2.0
        })
    );
    assert_eq!(
        Capsule::with_subdivisions(origin, 1.0, 3.0, 16, 1).generate(),
        Err(InvalidParameterError::TooFewRings(1))
    );
    assert_eq!(
        Plane::new(origin, Vector::zeros(), 10.0).generate(),
        Err(InvalidParameterError::DegenerateNormal)
    );
    assert!(Sphere::new(origin, Real::NAN).validate().is_err());
}
