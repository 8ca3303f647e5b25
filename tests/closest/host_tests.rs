use approx::assert_relative_eq;
use closest::internals::host::{closest_host, HostArray, HostMatrix};
use closest::prelude::*;

fn double(rows: usize, cols: usize, data: Vec<f64>) -> HostArray {
    HostMatrix::new(rows, cols, data).unwrap().into()
}

fn single(rows: usize, cols: usize, data: Vec<f32>) -> HostArray {
    HostMatrix::new(rows, cols, data).unwrap().into()
}

#[test]
fn test_indices_are_one_based_in_input_precision() {
    let a = double(2, 2, vec![0.0, 0.0, 4.9, 5.2]);
    let b = double(2, 3, vec![0.0, 0.0, 1.0, 1.0, 5.0, 5.0]);

    let out = closest_host(&[a, b], 1).unwrap();

    assert_eq!(out.len(), 1);
    match &out[0] {
        HostArray::Double(k) => {
            assert_eq!((k.rows(), k.cols()), (1, 2));
            assert_eq!(k.data(), &[1.0, 3.0]);
        }
        other => panic!("Expected double index output, got {other:?}"),
    }
}

#[test]
fn test_second_output_holds_distances() {
    let a = single(2, 1, vec![0.0, 0.0]);
    let b = single(2, 3, vec![3.0, 4.0, 1.0, 1.0, 5.0, 5.0]);

    let out = closest_host(&[a, b], 2).unwrap();

    assert_eq!(out.len(), 2);
    let (k, d) = match (&out[0], &out[1]) {
        (HostArray::Single(k), HostArray::Single(d)) => (k, d),
        other => panic!("Expected single outputs, got {other:?}"),
    };
    assert_eq!(k.data(), &[2.0]);
    assert_eq!(d.rows(), 1);
    assert_relative_eq!(d.data()[0], 2.0);
}

#[test]
fn test_zero_outputs_still_returns_indices() {
    let a = double(1, 1, vec![3.0]);
    let b = double(1, 2, vec![0.0, 4.0]);

    let out = closest_host(&[a, b], 0).unwrap();

    assert_eq!(out, vec![double(1, 1, vec![2.0])]);
}

#[test]
fn test_input_count() {
    let a = double(1, 1, vec![0.0]);

    let err = closest_host(&[a.clone()], 1).unwrap_err();
    assert_eq!(
        err,
        ClosestError::ArgumentCount {
            role: "input",
            expected: "2",
            got: 1
        }
    );

    let err = closest_host(&[a.clone(), a.clone(), a], 1).unwrap_err();
    assert!(matches!(
        err,
        ClosestError::ArgumentCount {
            role: "input",
            got: 3,
            ..
        }
    ));
}

#[test]
fn test_output_count() {
    let a = double(1, 1, vec![0.0]);
    let b = double(1, 1, vec![0.0]);

    let err = closest_host(&[a, b], 3).unwrap_err();

    assert!(matches!(
        err,
        ClosestError::ArgumentCount {
            role: "output",
            got: 3,
            ..
        }
    ));
}

#[test]
fn test_row_count_checked_before_type() {
    let a = double(3, 5, vec![0.0; 15]);
    let b = single(4, 6, vec![0.0; 24]);

    let err = closest_host(&[a, b], 1).unwrap_err();

    assert_eq!(
        err,
        ClosestError::DimensionMismatch {
            source_dims: 3,
            target_dims: 4
        }
    );
}

#[test]
fn test_mixed_precision_rejected() {
    let a = double(2, 1, vec![0.0, 0.0]);
    let b = single(2, 1, vec![0.0, 0.0]);

    let err = closest_host(&[a, b], 1).unwrap_err();

    assert_eq!(
        err,
        ClosestError::TypeMismatch {
            source_type: "double".to_string(),
            target_type: "single".to_string()
        }
    );
}

#[test]
fn test_unsupported_class_rejected() {
    let int = |cols| HostArray::Unsupported {
        class: "int32".to_string(),
        rows: 2,
        cols,
    };

    let err = closest_host(&[int(3), int(4)], 1).unwrap_err();

    assert!(matches!(err, ClosestError::TypeMismatch { .. }));
    assert!(err.to_string().contains("int32"));
}

#[test]
fn test_empty_target_rejected() {
    let a = double(2, 1, vec![0.0, 0.0]);
    let b = double(2, 0, vec![]);

    let err = closest_host(&[a, b], 2).unwrap_err();

    assert_eq!(err, ClosestError::EmptyTargetSet { source_points: 1 });
}

#[test]
fn test_host_matrix_shape_checked() {
    let err = HostMatrix::<f64>::new(2, 2, vec![0.0; 3]).unwrap_err();
    assert!(matches!(err, ClosestError::ShapeMismatch { len: 3, .. }));
}
