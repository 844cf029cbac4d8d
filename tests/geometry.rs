//! Test the cube geometry surface
use approx::assert_relative_eq;
use ndcube::{
    shapes::{reference_cube, unit_cube},
    traits::{Geometry, GeometryMap},
    AxisAlignedCubeGeometry, AxisMask, CubeGeometryMap,
};
use rlst::{rlst_dynamic_array2, RawAccessMut};

fn one_point_quadrature_volume<G: Geometry<T = f64>>(g: &G) -> f64 {
    // a single midpoint sample with unit weight is exact for an affine map
    let midpoint = vec![0.5; g.topology_dimension()];
    g.integration_element(&midpoint)
}

#[test]
fn test_quadrature_consistency() {
    let square = AxisAlignedCubeGeometry::new(&[0.0, 0.0], &[2.0, 1.0]);
    assert_relative_eq!(one_point_quadrature_volume(&square), 2.0, epsilon = 1e-14);

    let edge = AxisAlignedCubeGeometry::with_axes(
        1,
        &[5.0, 0.0, -2.0],
        &[5.0, 4.0, -2.0],
        AxisMask::from_axes(&[1]),
    );
    assert_relative_eq!(one_point_quadrature_volume(&edge), 4.0, epsilon = 1e-14);

    for dim in 1..4 {
        assert_relative_eq!(
            one_point_quadrature_volume(&reference_cube::<f64>(dim)),
            1.0,
            epsilon = 1e-14
        );
    }
}

#[test]
fn test_embedded_edge_maps() {
    let edge = AxisAlignedCubeGeometry::with_axes(
        1,
        &[5.0, 0.0, -2.0],
        &[5.0, 4.0, -2.0],
        AxisMask::from_axes(&[1]),
    );

    let mut x = vec![0.0; 3];
    edge.global(&[0.25], &mut x);
    assert_eq!(x, vec![5.0, 1.0, -2.0]);

    let mut l = vec![0.0];
    edge.local(&[5.0, 3.0, -2.0], &mut l);
    assert_relative_eq!(l[0], 0.75, epsilon = 1e-14);
}

#[test]
fn test_geometry_map_over_face() {
    // a flat face of a cell in 3D, mapped at a 2x2 grid of reference points
    let face = AxisAlignedCubeGeometry::with_axes(
        2,
        &[0.0, 0.0, 1.0],
        &[2.0, 0.0, 4.0],
        AxisMask::from_axes(&[0, 2]),
    );
    let mut points = rlst_dynamic_array2!(f64, [2, 4]);
    points
        .data_mut()
        .copy_from_slice(&[0.25, 0.25, 0.25, 0.75, 0.75, 0.25, 0.75, 0.75]);
    let map = CubeGeometryMap::new(&face, &points);

    assert_eq!(map.topology_dimension(), 2);
    assert_eq!(map.geometry_dimension(), 3);
    assert_eq!(map.point_count(), 4);

    let mut physical = vec![0.0; 3 * 4];
    map.points(&mut physical);
    for point_index in 0..4 {
        // the inactive axis stays at its lower coordinate
        assert_eq!(physical[3 * point_index + 1], 0.0);
    }
    assert_eq!(&physical[..3], &[0.5, 0.0, 1.75]);

    let mut jdets = vec![0.0; 4];
    map.integration_elements(&mut jdets);
    for jdet in &jdets {
        assert_relative_eq!(*jdet, face.volume(), epsilon = 1e-14);
    }
}

#[test]
fn test_corners_shared_between_instances() {
    // geometries are plain values and can be queried from multiple threads
    let cube = unit_cube::<f64>();
    std::thread::scope(|s| {
        for k in 0..cube.corner_count() {
            let g = &cube;
            s.spawn(move || {
                let mut corner = vec![0.0; 3];
                g.corner(k, &mut corner);
                for (j, c) in corner.iter().enumerate() {
                    assert_eq!(*c, (k >> j & 1) as f64);
                }
            });
        }
    });
}
