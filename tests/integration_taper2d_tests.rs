use taper_rs::prelude::*;

#[test]
fn test_taper2d_shape() {
    let mask = taper2d::<f64>(4, 5, 2, Hanning, None).unwrap();
    assert_eq!(mask.shape(), (5, 4));
    assert_eq!(mask.len(), 20);
    assert!(!mask.is_empty());
}

#[test]
fn test_taper2d_columns_equal_1d_taper() {
    let nt = 6;
    let nmask = 10;
    let ntap = 3;

    let taper = hanning_taper::<f64>(nmask, ntap).unwrap();
    let mask = taper2d::<f64>(nt, nmask, ntap, Hanning, None).unwrap();

    for j in 0..nt {
        assert_eq!(mask.column(j), taper, "column {} differs", j);
    }
}

#[test]
fn test_taper2d_rows_are_constant() {
    let mask = taper2d::<f64>(7, 9, 2, CosineSquare, None).unwrap();
    for i in 0..9 {
        let row = mask.row(i);
        assert!(row.iter().all(|&v| v == row[0]), "row {} not constant", i);
    }
}

#[test]
fn test_taper2d_cosine_dispatch() {
    let mask = taper2d::<f64>(3, 5, 0, Cosine, None).unwrap();
    assert_eq!(mask.column(0), cosine_taper::<f64>(5, false));

    let mask = taper2d::<f64>(3, 5, 0, CosineSquare, None).unwrap();
    assert_eq!(mask.column(0), cosine_taper::<f64>(5, true));
}

#[test]
fn test_taper2d_no_taper_is_all_ones() {
    let mask = taper2d::<f64>(4, 5, 0, NoTaper, None).unwrap();
    assert_eq!(mask.shape(), (5, 4));
    assert!(mask.as_slice().iter().all(|&v| v == 1.0));
}

#[test]
fn test_taper2d_no_taper_ignores_width() {
    // ntap far larger than the mask; NoTaper skips validation entirely
    let mask = taper2d::<f64>(2, 5, 50, NoTaper, None).unwrap();
    assert!(mask.as_slice().iter().all(|&v| v == 1.0));
}

#[test]
fn test_taper2d_propagates_invalid_width() {
    let err = taper2d::<f64>(4, 5, 3, Hanning, None).unwrap_err();
    assert_eq!(err, TaperError::InvalidTaperWidth { ntap: 3, max: 2 });
}

#[test]
fn test_taper2d_values_in_range() {
    let mask = taper2d::<f64>(8, 32, 8, Hanning, None).unwrap();
    assert!(mask.as_slice().iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn test_taper2d_zero_time_samples() {
    let mask = taper2d::<f64>(0, 5, 2, Hanning, None).unwrap();
    assert_eq!(mask.shape(), (5, 0));
    assert!(mask.is_empty());
}

#[test]
fn test_taper2d_get_matches_column() {
    let mask = taper2d::<f64>(3, 8, 2, Hanning, None).unwrap();
    let col = mask.column(1);
    for i in 0..8 {
        assert_eq!(mask.get(i, 1), col[i]);
    }
}

#[test]
fn test_taper2d_display() {
    let mask = taper2d::<f64>(4, 5, 0, NoTaper, None).unwrap();
    assert_eq!(format!("{}", mask), "2D taper mask: 5 x 4");
}
