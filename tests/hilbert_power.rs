use approx::assert_abs_diff_eq;

use hilbert_eigen::math::hilbert::{fill_hilbert, hilbert};
use hilbert_eigen::math::matrix::{matrix_vector_product, Matrix};
use hilbert_eigen::math::power::PowerIteration;
use hilbert_eigen::math::vector::{max_abs, ones, scale};
use hilbert_eigen::{run, RunConfig};

// Largest eigenvalue of [[1, 1/2], [1/2, 1/3]]: (4/3 + sqrt(13/9)) / 2
fn hilbert2_dominant() -> f64 {
    (4.0 / 3.0 + (13.0_f64 / 9.0).sqrt()) / 2.0
}

#[test]
fn hilbert_entries_and_symmetry() {
    for n in 1..=8 {
        let m = hilbert(n).unwrap();
        assert_eq!(m.rows(), n);
        assert_eq!(m.cols(), n);
        for i in 0..n {
            for j in 0..n {
                assert_eq!(m.get(i, j), 1.0 / (i + j + 1) as f64);
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        assert!(m.is_symmetric());
    }
}

#[test]
fn hilbert_requires_square() {
    let mut m = Matrix::zeros(2, 3).unwrap();
    assert!(fill_hilbert(&mut m).is_err());
    assert!(hilbert(0).is_err());
}

#[test]
fn one_by_one_is_a_fixed_point() {
    let engine = PowerIteration::new(hilbert(1).unwrap()).unwrap();
    for iterations in [0, 1, 5, 50] {
        let est = engine.run(&[1.0], iterations).unwrap();
        assert_eq!(est.estimates.len(), iterations + 1);
        assert!(est.estimates.iter().all(|mu| *mu == 1.0));
        assert_eq!(est.eigenvector, vec![1.0]);
    }
}

#[test]
fn zero_iterations_yields_single_unscaled_product() {
    let m = hilbert(2).unwrap();
    let engine = PowerIteration::new(m.clone()).unwrap();

    let mut v = ones(2);
    let mut seen = Vec::new();
    let mu = engine.run_with(&mut v, 0, |round, mu| seen.push((round, mu))).unwrap();

    let mut expected = ones(2);
    matrix_vector_product(&m, &mut expected);
    assert_eq!(seen, vec![(0, max_abs(&expected))]);
    assert_eq!(mu, 1.5);
    // no rescale after the final round
    assert_eq!(v, expected);
    assert_abs_diff_eq!(v[1], 5.0 / 6.0, epsilon = 1e-15);
}

#[test]
fn hilbert2_converges_monotonically() {
    let est = run(&RunConfig { rows: 2, cols: 2, iterations: 20 }).unwrap();
    assert_eq!(est.estimates.len(), 21);
    assert_eq!(est.estimates[0], 1.5);

    for w in est.estimates.windows(2) {
        assert!(w[1] <= w[0] + 1e-12, "estimates not non-increasing: {:?}", w);
        assert!(w[1] >= hilbert2_dominant() - 1e-12);
    }
    assert_abs_diff_eq!(est.eigenvalue(), hilbert2_dominant(), epsilon = 1e-3);
    assert!(!est.is_degenerate());
}

#[test]
fn eigenvector_satisfies_eigen_equation() {
    let n = 5;
    let est = run(&RunConfig { rows: n, cols: n, iterations: 60 }).unwrap();
    let lambda = est.eigenvalue();

    let mut x = est.eigenvector.clone();
    let m = max_abs(&x);
    scale(&mut x, 1.0 / m);
    let mut ax = x.clone();
    matrix_vector_product(&hilbert(n).unwrap(), &mut ax);
    for i in 0..n {
        assert_abs_diff_eq!(ax[i], lambda * x[i], epsilon = 1e-9);
    }
    // lambda_max(H_5) ~= 1.5671
    assert_abs_diff_eq!(lambda, 1.567_050_691, epsilon = 1e-6);
}

#[test]
fn rounds_are_rescaled_between_products() {
    let m = hilbert(4).unwrap();
    let engine = PowerIteration::new(m.clone()).unwrap();

    for k in 0..4 {
        let mut v = ones(4);
        let mut mu_k = 0.0;
        engine.run_with(&mut v, k, |_, mu| mu_k = mu).unwrap();

        // what the engine feeds into round k + 1
        let mut w = v.clone();
        scale(&mut w, 1.0 / mu_k);
        assert_abs_diff_eq!(max_abs(&w), 1.0, epsilon = 1e-15);

        matrix_vector_product(&m, &mut w);
        let next = engine.run(&ones(4), k + 1).unwrap();
        assert_eq!(next.estimates[k], mu_k);
        assert_eq!(next.estimates[k + 1], max_abs(&w));
        assert_eq!(next.eigenvector, w);
    }
}

#[test]
fn run_is_deterministic() {
    let cfg = RunConfig { rows: 6, cols: 6, iterations: 10 };
    assert_eq!(run(&cfg).unwrap(), run(&cfg).unwrap());
}

#[test]
fn zero_estimate_degenerates_into_nan() {
    let engine = PowerIteration::new(Matrix::zeros(2, 2).unwrap()).unwrap();
    let est = engine.run(&ones(2), 2).unwrap();
    assert_eq!(est.estimates[0], 0.0);
    assert!(est.estimates[1].is_nan());
    assert!(est.estimates[2].is_nan());
    assert!(est.is_degenerate());
}

#[test]
fn engine_rejects_mismatched_inputs() {
    assert!(PowerIteration::new(Matrix::zeros(2, 3).unwrap()).is_err());
    let engine = PowerIteration::new(hilbert(3).unwrap()).unwrap();
    assert!(engine.run(&ones(2), 1).is_err());
}
