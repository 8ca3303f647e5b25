use approx::assert_abs_diff_eq;
use closest::prelude::*;

#[test]
fn test_single_point_against_three_targets() {
    // A = (0, 0); B = (0, 0), (1, 1), (5, 5)
    let a = vec![0.0, 0.0];
    let b = vec![0.0, 0.0, 1.0, 1.0, 5.0, 5.0];

    let res = Closest::new()
        .dimensions(2)
        .return_distances(true)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&a, &b)
        .unwrap();

    assert_eq!(res.indices, vec![0]);
    assert_eq!(res.indices_with_base(IndexBase::One), vec![1]);
    assert_eq!(res.distances, Some(vec![0.0]));
    assert_eq!(res.dimensions, 2);
    assert_eq!(res.target_count, 3);
}

#[test]
fn test_distances_are_squared() {
    let a = vec![0.0f64, 0.0, 10.0, 10.0];
    let b = vec![3.0f64, 4.0, 9.0, 9.0];

    let res = Closest::new()
        .dimensions(2)
        .return_distances(true)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&a, &b)
        .unwrap();

    assert_eq!(res.indices, vec![0, 1]);
    let d = res.distances.unwrap();
    assert_abs_diff_eq!(d[0], 25.0, epsilon = 1e-12);
    assert_abs_diff_eq!(d[1], 2.0, epsilon = 1e-12);
}

#[test]
fn test_distances_omitted_by_default() {
    let a = vec![1.0f32, 2.0];
    let b = vec![1.0f32, 2.0];

    let res = Closest::new()
        .dimensions(1)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&a, &b)
        .unwrap();

    assert_eq!(res.indices, vec![0, 1]);
    assert!(res.distances.is_none());
    assert!(res.pairs().is_none());
}

#[test]
fn test_self_match() {
    let n = 40;
    let dims = 4;
    let pts: Vec<f64> = (0..n * dims).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();
    let set = PointSet::new(&pts, dims, n).unwrap();

    let res = closest(&set, &set, true).unwrap();

    assert_eq!(res.indices, (0..n).collect::<Vec<_>>());
    for &d in res.distances.as_ref().unwrap() {
        assert_eq!(d, 0.0);
    }
}

#[test]
fn test_ties_pick_lowest_index() {
    // every target sits at distance 1 from the origin
    let a = vec![0.0f64, 0.0];
    let b = vec![0.0, 1.0, 1.0, 0.0, 0.0, -1.0, -1.0, 0.0];

    let res = Closest::new()
        .dimensions(2)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&a, &b)
        .unwrap();

    assert_eq!(res.indices, vec![0]);
}

#[test]
fn test_precision_parity() {
    let a64: Vec<f64> = (0..60).map(|i| ((i * 7) % 23) as f64 - 11.0).collect();
    let b64: Vec<f64> = (0..45).map(|i| ((i * 5) % 19) as f64 * 1.5 - 9.0).collect();
    let a32: Vec<f32> = a64.iter().map(|&v| v as f32).collect();
    let b32: Vec<f32> = b64.iter().map(|&v| v as f32).collect();

    let res64 = Closest::<f64>::new()
        .dimensions(3)
        .return_distances(true)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&a64, &b64)
        .unwrap();
    let res32 = Closest::<f32>::new()
        .dimensions(3)
        .return_distances(true)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&a32, &b32)
        .unwrap();

    assert_eq!(res64.indices, res32.indices);
    let (d64, d32) = (res64.distances.unwrap(), res32.distances.unwrap());
    for (x, y) in d64.iter().zip(&d32) {
        assert_abs_diff_eq!(*x, *y as f64, epsilon = 1e-4);
    }
}

#[test]
fn test_parallel_and_early_exit_are_invisible() {
    let a: Vec<f64> = (0..600).map(|i| ((i * 31) % 97) as f64 / 7.0).collect();
    let b: Vec<f64> = (0..300).map(|i| ((i * 17) % 83) as f64 / 5.0).collect();

    let base = Closest::new()
        .dimensions(3)
        .return_distances(true)
        .adapter(Batch)
        .parallel(false)
        .build()
        .unwrap()
        .fit(&a, &b)
        .unwrap();

    for (parallel, early_exit) in [(false, true), (true, false), (true, true)] {
        let res = Closest::new()
            .dimensions(3)
            .return_distances(true)
            .early_exit(early_exit)
            .parallel(parallel)
            .adapter(Batch)
            .build()
            .unwrap()
            .fit(&a, &b)
            .unwrap();
        assert_eq!(res, base, "parallel={parallel} early_exit={early_exit}");
    }
}

#[test]
fn test_matcher_is_reusable() {
    let matcher = Closest::new()
        .dimensions(1)
        .return_distances(true)
        .adapter(Batch)
        .build()
        .unwrap();

    let b = vec![0.0f64, 10.0, 20.0];
    let first = matcher.fit(&vec![9.0, 16.0], &b).unwrap();
    let second = matcher.fit(&vec![9.0, 16.0], &b).unwrap();

    assert_eq!(first.indices, vec![1, 2]);
    assert_eq!(first, second);
}

#[test]
fn test_empty_source_yields_empty_result() {
    let a: Vec<f64> = Vec::new();
    let b = vec![1.0, 2.0, 3.0];

    let res = Closest::new()
        .dimensions(3)
        .return_distances(true)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&a, &b)
        .unwrap();

    assert!(res.is_empty());
    assert_eq!(res.distances, Some(Vec::new()));
}

#[test]
fn test_zero_dimensional_points_match_first_target() {
    let a = PointSet::<f64>::new(&[], 0, 3).unwrap();
    let b = PointSet::<f64>::new(&[], 0, 2).unwrap();

    let res = closest(&a, &b, true).unwrap();

    assert_eq!(res.indices, vec![0, 0, 0]);
    assert_eq!(res.distances, Some(vec![0.0; 3]));
}

#[test]
fn test_dimension_mismatch() {
    let a = PointSet::new(&[0.0f64; 15], 3, 5).unwrap();
    let b = PointSet::new(&[0.0f64; 24], 4, 6).unwrap();

    let err = closest(&a, &b, false).unwrap_err();

    assert_eq!(
        err,
        ClosestError::DimensionMismatch {
            source_dims: 3,
            target_dims: 4
        }
    );
}

#[test]
fn test_empty_target() {
    let a = vec![1.0f32, 2.0];
    let b: Vec<f32> = Vec::new();

    let err = Closest::new()
        .dimensions(2)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&a, &b)
        .unwrap_err();

    match err {
        ClosestError::EmptyTargetSet { source_points: 1 } => (),
        other => panic!("Expected EmptyTargetSet, got {other:?}"),
    }
}

#[test]
fn test_error_handling() {
    let a = vec![1.0, 2.0, 3.0];
    let b = vec![1.0, 2.0];

    let err = Closest::<f64>::new().dimensions(0).adapter(Batch).build();
    assert!(matches!(err, Err(ClosestError::InvalidInput(_))));

    let no_dims = Closest::new().adapter(Batch).build().unwrap();
    assert!(matches!(
        no_dims.fit(&a, &b),
        Err(ClosestError::InvalidInput(_))
    ));

    let model = Closest::new().dimensions(2).adapter(Batch).build().unwrap();
    match model.fit(&a, &b) {
        Err(ClosestError::ShapeMismatch { len: 3, .. }) => (),
        other => panic!("Expected ShapeMismatch, got {other:?}"),
    }
}

#[cfg(feature = "cpu")]
#[test]
fn test_ndarray_integration() {
    use ndarray::array;

    // columns are points: (0, 0) and (4, 4)
    let a = array![[0.0, 4.0], [0.0, 4.0]];
    // columns: (5, 5), (1, 0), (3.5, 3.5)
    let b = array![[5.0, 1.0, 3.5], [5.0, 0.0, 3.5]];

    let res = Closest::new()
        .return_distances(true)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&a, &b)
        .unwrap();

    assert_eq!(res.indices, vec![1, 2]);
    assert_eq!(res.distances, Some(vec![1.0, 0.5]));
}

#[cfg(feature = "cpu")]
#[test]
fn test_ndarray_shape_overrides_dimensions() {
    use ndarray::Array2;

    let a = Array2::<f32>::zeros((3, 2));
    let b = Array2::<f32>::ones((3, 4));

    // flat-buffer dimension count does not apply to shaped inputs
    let res = Closest::new()
        .dimensions(7)
        .adapter(Batch)
        .build()
        .unwrap()
        .fit(&a, &b)
        .unwrap();

    assert_eq!(res.dimensions, 3);
    assert_eq!(res.indices, vec![0, 0]);
}
