use std::sync::Arc;

use approx::assert_relative_eq;
use laminate_abd::math::symmetry_error;
use laminate_abd::prelude::*;

fn ud_ply() -> Arc<Ply> {
    Arc::new(Ply::from_rows(
        0.125,
        [[20.0, 1.0, 0.0], [1.0, 1.5, 0.0], [0.0, 0.0, 0.8]],
    ))
}

fn eight_ply_laminate() -> Laminate {
    let ply = ud_ply();
    Laminate::new(vec![
        (90.0, &ply),
        (90.0, &ply),
        (0.0, &ply),
        (90.0, &ply),
        (90.0, &ply),
        (0.0, &ply),
        (90.0, &ply),
        (90.0, &ply),
    ])
    .unwrap()
}

fn assert_symmetric(m: &Mat3) {
    assert!(symmetry_error(m) < 1e-12, "asymmetric matrix: {}", m);
}

#[test]
fn eight_ply_golden_values() {
    let laminate = eight_ply_laminate();

    let a = laminate.a().unwrap();
    assert_relative_eq!(a[(0, 0)], 6.125, epsilon = 1e-12);
    assert_relative_eq!(a[(1, 1)], 15.375, epsilon = 1e-12);
    assert_relative_eq!(a[(0, 1)], 1.0, epsilon = 1e-12);
    assert_relative_eq!(a[(2, 2)], 0.8, epsilon = 1e-12);
    assert_relative_eq!(a[(0, 2)], 0.0, epsilon = 1e-12);
    assert_relative_eq!(a[(1, 2)], 0.0, epsilon = 1e-12);

    let d = laminate.d().unwrap();
    assert_relative_eq!(d[(0, 0)], 0.293_619_791_666_666_7, epsilon = 1e-12);
    assert_relative_eq!(d[(1, 1)], 1.498_046_875, epsilon = 1e-12);
    assert_relative_eq!(d[(0, 1)], 1.0 / 12.0, epsilon = 1e-12);
    assert_relative_eq!(d[(2, 2)], 0.8 / 12.0, epsilon = 1e-12);

    // Plies 2 and 5 mirror each other, so the stack is midplane symmetric
    assert!(laminate.is_symmetric());
    assert_relative_eq!(*laminate.b().unwrap(), Mat3::zeros(), epsilon = 1e-12);

    for m in [a, laminate.b().unwrap(), d] {
        assert_symmetric(m);
    }
    for i in 0..3 {
        assert!(a[(i, i)] > 0.0);
        assert!(d[(i, i)] > 0.0);
    }
}

#[test]
fn z_position_spans_total_thickness() {
    let laminate = eight_ply_laminate();
    let z = laminate.z_position();

    assert_eq!(z.len(), 9);
    assert_relative_eq!(z[0], -0.5, epsilon = 1e-15);
    assert_relative_eq!(z[8], 0.5, epsilon = 1e-15);
    assert!(z.windows(2).all(|w| w[1] > w[0]));
    assert_relative_eq!(laminate.total_thickness(), 1.0, epsilon = 1e-15);
}

#[test]
fn unsymmetric_cross_ply_has_coupling() {
    let laminate: Laminate = Laminate::uniform(&[0.0, 90.0], &ud_ply()).unwrap();
    let b = laminate.b().unwrap();

    // 0.5 * (0 - 0.125²) * 20 + 0.5 * (0.125² - 0) * 1.5
    assert_relative_eq!(b[(0, 0)], -0.144_531_25, epsilon = 1e-12);
    assert_relative_eq!(b[(1, 1)], 0.144_531_25, epsilon = 1e-12);
    assert_relative_eq!(b[(0, 1)], 0.0, epsilon = 1e-12);
    assert!(!laminate.is_symmetric());
}

#[test]
fn symmetric_angle_ply_has_no_coupling() {
    let thin = ud_ply();
    let thick = Arc::new(Ply::new(0.3, thin.q0));
    let laminate: Laminate = Laminate::new(vec![
        (30.0, &thin),
        (-60.0, &thick),
        (15.0, &thin),
        (15.0, &thin),
        (-60.0, &thick),
        (30.0, &thin),
    ])
    .unwrap();

    assert!(laminate.is_symmetric());
    assert_relative_eq!(*laminate.b().unwrap(), Mat3::zeros(), epsilon = 1e-12);
    assert_symmetric(laminate.a().unwrap());
    assert_symmetric(laminate.d().unwrap());
}

#[test]
fn half_turn_gives_same_laminate_stiffness() {
    let ply = ud_ply();
    let original: Laminate = Laminate::uniform(&[0.0, 45.0, -30.0], &ply).unwrap();
    let turned: Laminate = Laminate::uniform(&[180.0, 225.0, 150.0], &ply).unwrap();

    for (q, q_turned) in original.q_layup().unwrap().iter().zip(turned.q_layup().unwrap()) {
        assert_relative_eq!(*q, *q_turned, epsilon = 1e-10);
    }
    assert_relative_eq!(
        original.abd_matrix().unwrap(),
        turned.abd_matrix().unwrap(),
        epsilon = 1e-10
    );
    // Angles are stored as given
    assert_eq!(turned.angles(), vec![180.0, 225.0, 150.0]);
}

#[test]
fn zero_degree_plies_keep_material_stiffness() {
    let ply = ud_ply();
    let laminate: Laminate = Laminate::uniform(&[0.0, 0.0, 0.0], &ply).unwrap();
    for q in laminate.q_layup().unwrap() {
        assert_eq!(*q, ply.q0);
    }
}

#[test]
fn equality_compares_layups() {
    let ply = ud_ply();
    let a: Laminate = Laminate::uniform(&[0.0, 45.0, 90.0], &ply).unwrap();
    let same: Laminate = Laminate::uniform(&[0.0, 45.0, 90.0], &ply).unwrap();
    let reordered: Laminate = Laminate::uniform(&[45.0, 0.0, 90.0], &ply).unwrap();
    let other_angle: Laminate = Laminate::uniform(&[0.0, 45.0, 85.0], &ply).unwrap();

    assert_eq!(a, same);
    assert_ne!(a, reordered);
    assert_ne!(a, other_angle);

    // Distinct but equal-valued materials compare equal
    let copy = Arc::new((*ply).clone());
    let with_copy: Laminate = Laminate::uniform(&[0.0, 45.0, 90.0], &copy).unwrap();
    assert_eq!(a, with_copy);

    let heavier = Arc::new(Ply::new(0.25, ply.q0));
    let with_heavier: Laminate = Laminate::uniform(&[0.0, 45.0, 90.0], &heavier).unwrap();
    assert_ne!(a, with_heavier);
}

#[test]
fn repeated_access_is_bit_identical() {
    let laminate = eight_ply_laminate();

    let a1 = *laminate.a().unwrap();
    let b1 = *laminate.b().unwrap();
    let d1 = *laminate.d().unwrap();
    let q1 = laminate.q_layup().unwrap().to_vec();
    let z1 = laminate.z_position().to_vec();

    for _ in 0..3 {
        assert_eq!(*laminate.a().unwrap(), a1);
        assert_eq!(*laminate.b().unwrap(), b1);
        assert_eq!(*laminate.d().unwrap(), d1);
        assert_eq!(laminate.q_layup().unwrap(), q1.as_slice());
        assert_eq!(laminate.z_position(), z1.as_slice());
    }
}

#[test]
fn concurrent_access_agrees() {
    let laminate = eight_ply_laminate();
    let expected = eight_ply_laminate().abd_matrix().unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| laminate.abd_matrix().unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn layup_document_with_text_angle_is_rejected() {
    let json = r#"{
        "plies": { "UD": { "thickness": 0.125, "q0": [[20, 1, 0], [1, 1.5, 0], [0, 0, 0.8]] } },
        "layup": [[90, "UD"], ["zero", "UD"]]
    }"#;
    let err = Laminate::from_json(json).unwrap_err();
    assert!(matches!(err, LaminateError::InvalidInput { index: Some(1), .. }));
    assert!(err.to_string().contains("entry 1"));
}

#[test]
fn layup_document_with_non_ply_is_rejected() {
    let json = r#"{ "layup": [[0, [1, 2, 3]]] }"#;
    let err = Laminate::from_json(json).unwrap_err();
    assert!(matches!(err, LaminateError::InvalidInput { index: Some(0), .. }));
}

#[test]
fn layup_document_matches_programmatic_laminate() {
    let json = r#"{
        "plies": { "UD": { "thickness": 0.125, "q0": [[20, 1, 0], [1, 1.5, 0], [0, 0, 0.8]] } },
        "layup": [
            [90, "UD"], [90, "UD"], [0, "UD"], [90, "UD"],
            [90, "UD"], [0, "UD"], [90, "UD"], [90, "UD"]
        ]
    }"#;
    let from_json = Laminate::from_json(json).unwrap();
    let programmatic = eight_ply_laminate();

    // The document labels its ply "UD"; labels do not take part in equality
    assert_eq!(from_json, programmatic);
    assert_eq!(from_json.abd_matrix().unwrap(), programmatic.abd_matrix().unwrap());
}
