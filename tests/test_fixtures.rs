use lj_cluster::analysis::eigen_fixtures::{self, EigenFixture};
use nalgebra::SymmetricEigen;

fn sorted_desc(mut v: Vec<f64>) -> Vec<f64> {
    v.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    v
}

fn assert_spectrum(fixture: &EigenFixture, computed: Vec<f64>) {
    let computed = sorted_desc(computed);
    assert_eq!(computed.len(), fixture.eigenvalues.len(), "{}", fixture.name);
    for (c, e) in computed.iter().zip(fixture.eigenvalues.iter()) {
        assert!(
            (c - e).abs() < 1e-8 * e.abs().max(1.0),
            "{}: computed {} vs reference {}",
            fixture.name,
            c,
            e
        );
    }
}

#[test]
fn test_fixture_set() {
    let all = eigen_fixtures::all();
    let names: Vec<_> = all.iter().map(|f| f.name).collect();
    assert_eq!(names, ["A1", "A2", "A3", "A4", "A5", "A6"]);

    for f in &all {
        assert!(f.matrix.is_square());
        assert_eq!(f.matrix.nrows(), f.eigenvalues.len());
        assert_eq!(sorted_desc(f.eigenvalues.clone()), f.eigenvalues);
    }
    assert!(eigen_fixtures::by_name("A7").is_none());
}

#[test]
fn test_trace_matches_eigenvalue_sum() {
    for f in eigen_fixtures::all() {
        let sum: f64 = f.eigenvalues.iter().sum();
        assert!((f.matrix.trace() - sum).abs() < 1e-9, "{}", f.name);
    }
}

#[test]
fn test_symmetric_fixtures() {
    for f in eigen_fixtures::all().into_iter().filter(|f| f.symmetric) {
        let eigen = SymmetricEigen::new(f.matrix.clone());
        assert_spectrum(&f, eigen.eigenvalues.iter().cloned().collect());
    }
}

#[test]
fn test_general_fixtures() {
    for f in eigen_fixtures::all().into_iter().filter(|f| !f.symmetric) {
        let evals = f.matrix.complex_eigenvalues();
        for z in evals.iter() {
            assert!(z.im.abs() < 1e-8, "{}: unexpected complex eigenvalue {}", f.name, z);
        }
        assert_spectrum(&f, evals.iter().map(|z| z.re).collect());
    }
}
