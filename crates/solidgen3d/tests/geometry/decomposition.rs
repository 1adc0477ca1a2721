use na::{Translation3, UnitQuaternion};
use solidgen3d::bounding_volume::{Aabb, BoundingVolume};
use solidgen3d::decomposition::{
    AggregateEnvelope, BoxVolume, CollisionDecomposer, FlatMeshDescriptor, MeshDescriptor,
    DEBUG_PALETTE,
};
use solidgen3d::math::{Isometry, Point, Real, Vector};
use solidgen3d::shape::{ShapeGenerator, Sphere};

fn box_points(half_extents: Vector<Real>) -> Vec<Point<Real>> {
    Aabb::from_half_extents(Point::origin(), half_extents)
        .vertices()
        .to_vec()
}

#[test]
fn degenerate_and_debug_meshes_are_filtered_out() {
    let a = box_points(Vector::new(1.0, 1.0, 1.0));
    let b = box_points(Vector::new(0.1, 0.1, 0.0001));
    let c = box_points(Vector::new(1.0, 1.0, 1.0));
    let meshes = [
        MeshDescriptor::new("A", &a[..], Isometry::identity()),
        MeshDescriptor::new("B", &b[..], Isometry::identity()),
        MeshDescriptor::new("debug_x", &c[..], Isometry::identity()),
    ];

    let decomposition = CollisionDecomposer::default().decompose(meshes);

    assert_eq!(
        decomposition.volumes,
        vec![BoxVolume {
            name: "A".to_string(),
            center: Point::origin(),
            half_extents: Vector::new(1.0, 1.0, 1.0),
            color_index: 0,
        }]
    );
    assert_eq!(decomposition.volumes[0].color(), DEBUG_PALETTE[0]);
    assert_eq!(
        decomposition.envelope,
        Some(AggregateEnvelope::from_half_extents(
            Point::origin(),
            Vector::new(1.0, 1.0, 1.0),
        ))
    );
}

#[test]
fn empty_collection_yields_no_envelope() {
    let meshes: [MeshDescriptor<Isometry<Real>>; 0] = [];
    let decomposition = CollisionDecomposer::default().decompose(meshes);
    assert!(decomposition.is_empty());
    assert!(decomposition.envelope.is_none());
    assert!(decomposition.debug_geometry().is_empty());
}

#[test]
fn boxes_enclose_their_transformed_meshes() {
    let mut rng = oorandom::Rand32::new(42);
    let sphere = Sphere::with_subdivisions(Point::origin(), 1.0, 12, 6)
        .generate()
        .unwrap();
    let mut names = Vec::new();
    let mut transforms = Vec::new();

    for i in 0..20 {
        names.push(format!("mesh{i}"));
        let rotation = UnitQuaternion::from_euler_angles(
            rng.rand_float() as Real * 3.0,
            rng.rand_float() as Real * 3.0,
            rng.rand_float() as Real * 3.0,
        );
        let translation = Translation3::new(
            rng.rand_float() as Real * 10.0 - 5.0,
            rng.rand_float() as Real * 10.0 - 5.0,
            rng.rand_float() as Real * 10.0 - 5.0,
        );
        transforms.push(Isometry::from_parts(translation, rotation));
    }

    let meshes: Vec<_> = names
        .iter()
        .zip(transforms.iter())
        .map(|(name, pos)| MeshDescriptor::new(name.as_str(), sphere.positions(), *pos))
        .collect();
    let decomposition = CollisionDecomposer::default().decompose(meshes.iter().copied());

    assert_eq!(decomposition.volumes.len(), 20);
    assert_eq!(
        decomposition,
        CollisionDecomposer::default().decompose(meshes.iter().copied())
    );

    let envelope = decomposition.envelope.unwrap().aabb();

    for (i, (volume, pos)) in decomposition.volumes.iter().zip(&transforms).enumerate() {
        assert_eq!(volume.name, names[i]);
        assert_eq!(volume.color_index, i);
        assert_eq!(volume.color(), DEBUG_PALETTE[i % 8]);

        // The envelope holds the exact corners of every box.
        assert!(envelope.contains(&volume.aabb()));

        // A box rebuilt from its center and half-extents may be off by rounding.
        let aabb = volume.aabb().loosened(1.0e-4);
        for pt in sphere.positions() {
            assert!(aabb.contains_local_point(&(pos * pt)));
        }
    }
}

#[test]
fn flat_and_point_inputs_agree() {
    let pts = box_points(Vector::new(0.5, 2.0, 1.0));
    let coords: Vec<Real> = pts.iter().flat_map(|p| [p.x, p.y, p.z]).collect();
    let pos = Isometry::translation(1.0, 2.0, 3.0);
    let decomposer = CollisionDecomposer::default();

    let from_points = decomposer.decompose([MeshDescriptor::new("m", &pts[..], pos)]);
    let from_coords = decomposer
        .decompose_flat([FlatMeshDescriptor::new("m", &coords[..], pos)])
        .unwrap();

    assert_eq!(from_points, from_coords);
}

#[test]
fn debug_meshes_are_ignored_when_fed_back() {
    let pts = box_points(Vector::new(1.0, 2.0, 3.0));
    let decomposer = CollisionDecomposer::default();
    let decomposition =
        decomposer.decompose([MeshDescriptor::new("hull", &pts[..], Isometry::identity())]);
    let debug_meshes = decomposition.debug_geometry();
    assert_eq!(debug_meshes[0].name, "debug_collision_hull");

    let fed_back = decomposer.decompose(
        debug_meshes
            .iter()
            .map(|m| MeshDescriptor::new(&m.name, m.geometry.positions(), Isometry::identity())),
    );
    assert!(fed_back.is_empty());
}
