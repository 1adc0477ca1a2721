use solidgen3d::math::{Point, Real, Vector};
use solidgen3d::shape::{Plane, ShapeGenerator};

fn check_frame(normal: Vector<Real>) {
    let plane = Plane::new(Point::origin(), normal, 1.0);
    let (tangent, bitangent) = plane.tangent_frame().unwrap();

    assert_relative_eq!(tangent.dot(&plane.normal), 0.0, epsilon = 1.0e-5);
    assert_relative_eq!(bitangent.dot(&plane.normal), 0.0, epsilon = 1.0e-5);
    assert_relative_eq!(tangent.dot(&bitangent), 0.0, epsilon = 1.0e-5);
    assert_relative_eq!(tangent.norm(), 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(bitangent.norm(), 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(tangent.cross(&bitangent), plane.normal, epsilon = 1.0e-5);
}

#[test]
fn frame_near_the_vertical() {
    check_frame(Vector::new(0.0, 0.999, 0.04).normalize());
    check_frame(Vector::x());
    check_frame(Vector::y());
    check_frame(-Vector::y());
}

#[test]
fn random_frames_are_orthonormal() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let normal = Vector::from_fn(|_, _| rng.rand_float() as Real * 2.0 - 1.0);

        if normal.norm() > 1.0e-3 {
            check_frame(normal);
        }
    }
}

#[test]
fn generated_quad_is_centered_on_the_plane() {
    let plane = Plane::new(Point::new(1.0, 2.0, 3.0), Vector::new(0.0, 0.0, -2.0), 6.0);
    let buffer = plane.generate().unwrap();

    for pt in buffer.positions() {
        assert_relative_eq!(plane.signed_distance(pt), 0.0, epsilon = 1.0e-5);
    }

    let aabb = buffer.local_aabb().unwrap();
    assert_relative_eq!(aabb.center(), plane.point, epsilon = 1.0e-5);
    assert_relative_eq!(aabb.half_extents(), Vector::new(3.0, 3.0, 0.0), epsilon = 1.0e-5);
}
