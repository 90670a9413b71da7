use crate::*;

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_rotation_maps_measured_onto_reference() {
    let measured = Vector::new(100.0, 0.0, 16384.0);
    let reference = Vector::new(0.0, 0.0, 16384.0);

    let rotation = Matrix3::rotation_between(&measured, &reference).unwrap();
    let result = rotation * measured;

    assert!(result.approx_eq(&reference, 1e-6), "{:?} != {:?}", result, reference);
}

#[test]
fn test_rotation_round_trip_arbitrary_vectors() {
    let pairs = [
        (Vector::new(3.0, -3.0, 1.0), Vector::new(4.0, 9.0, 2.0)),
        (Vector::new(-812.0, 1532.0, 15910.0), Vector::new(0.0, 0.0, 16384.0)),
        (Vector::new(0.0, -16384.0, 0.0), Vector::new(0.0, 0.0, 16384.0)),
        (Vector::new(1.0, 1.0, 1.0), Vector::new(-2.0, 0.5, 0.0)),
    ];
    for (measured, reference) in pairs {
        let rotation = Matrix3::rotation_between(&measured, &reference).unwrap();
        let result = rotation * measured;
        assert!(result.approx_eq(&reference, 1e-6), "{:?} != {:?}", result, reference);
    }
}

#[test]
fn test_rotation_of_aligned_vectors_is_identity() {
    let v = Vector::new(0.0, 0.0, 16384.0);
    let rotation = Matrix3::rotation_between(&v, &v).unwrap();
    assert!(rotation.approx_eq(&Matrix3::identity(), TOLERANCE));
}

#[test]
fn test_rotation_of_antiparallel_vectors() {
    let measured = Vector::new(0.0, 0.0, -16384.0);
    let reference = Vector::new(0.0, 0.0, 16384.0);

    let rotation = Matrix3::rotation_between(&measured, &reference).unwrap();

    assert!((rotation * measured).approx_eq(&reference, 1e-6));
    // A half turn is still a proper rotation.
    assert!(approx_eq(rotation.determinant(), 1.0, TOLERANCE));
}

#[test]
fn test_rotation_is_orthonormal_for_equal_lengths() {
    let measured = Vector::new(3.0, 4.0, 0.0);
    let reference = Vector::new(0.0, 0.0, 5.0);

    let rotation = Matrix3::rotation_between(&measured, &reference).unwrap();

    assert!((rotation * rotation.transpose()).approx_eq(&Matrix3::identity(), TOLERANCE));
    assert!(approx_eq(rotation.determinant(), 1.0, TOLERANCE));
}

#[test]
fn test_rotation_scales_for_different_lengths() {
    let measured = Vector::new(0.0, 0.0, 2.0);
    let reference = Vector::new(0.0, 0.0, 4.0);

    let rotation = Matrix3::rotation_between(&measured, &reference).unwrap();

    assert!(rotation.approx_eq(&(Matrix3::identity() * 2.0), TOLERANCE));
}

#[test]
fn test_rotation_of_zero_vector_is_none() {
    let reference = Vector::new(0.0, 0.0, 1.0);
    assert!(Matrix3::rotation_between(&Vector::zero(), &reference).is_none());
    assert!(Matrix3::rotation_between(&reference, &Vector::zero()).is_none());
}

#[test]
fn test_skew_matches_cross_product() {
    let v = Vector::new(3.0, -3.0, 1.0);
    let w = Vector::new(4.0, 9.0, 2.0);
    assert!((Matrix3::skew(&v) * w).approx_eq(&v.cross(&w), TOLERANCE));
}

#[test]
fn test_matrix_product_with_identity() {
    let m = Matrix3::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
    assert!((m * Matrix3::identity()).approx_eq(&m, TOLERANCE));
    assert!((Matrix3::identity() * m).approx_eq(&m, TOLERANCE));
    assert!(approx_eq(m.determinant(), -3.0, TOLERANCE));
}

#[test]
fn test_matrix_product_and_transpose() {
    let a = Matrix3::from([[1.0, 2.0, 0.0], [0.0, 1.0, 3.0], [4.0, 0.0, 1.0]]);
    let b = Matrix3::from([[2.0, 0.0, 1.0], [1.0, 1.0, 0.0], [0.0, 5.0, 2.0]]);
    let expected = Matrix3::from([[4.0, 2.0, 1.0], [1.0, 16.0, 6.0], [8.0, 5.0, 6.0]]);
    assert!((a * b).approx_eq(&expected, TOLERANCE));

    let transposed = Matrix3::from([[1.0, 0.0, 4.0], [2.0, 1.0, 0.0], [0.0, 3.0, 1.0]]);
    assert_eq!(a.transpose(), transposed);
    assert!(((a * b).transpose()).approx_eq(&(b.transpose() * a.transpose()), TOLERANCE));
}
