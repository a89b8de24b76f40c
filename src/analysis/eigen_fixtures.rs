use nalgebra::DMatrix;

/// A test matrix paired with its known eigenvalues.
///
/// Eigenvalues are listed in descending order. `symmetric` marks the matrices
/// a symmetric-only solver can be pointed at.
#[derive(Debug, Clone)]
pub struct EigenFixture {
    pub name: &'static str,
    pub matrix: DMatrix<f64>,
    pub eigenvalues: Vec<f64>,
    pub symmetric: bool,
}

impl EigenFixture {
    fn new(
        name: &'static str,
        n: usize,
        rows: &[f64],
        eigenvalues: &[f64],
        symmetric: bool,
    ) -> Self {
        Self {
            name,
            matrix: DMatrix::from_row_slice(n, n, rows),
            eigenvalues: eigenvalues.to_vec(),
            symmetric,
        }
    }
}

/// A1-A3 suit any solver, A4-A5 are singular, A6 is singular with a triple
/// eigenvalue.
#[rustfmt::skip]
pub fn all() -> Vec<EigenFixture> {
    vec![
        EigenFixture::new("A1", 2, &[1.0, 3.0, 3.0, 1.0], &[4.0, -2.0], true),
        EigenFixture::new("A2", 2, &[3.0, 1.0, 1.0, 3.0], &[4.0, 2.0], true),
        EigenFixture::new(
            "A3",
            3,
            &[
                1.0, 2.0, 3.0,
                4.0, std::f64::consts::PI, 6.0,
                7.0, 8.0, std::f64::consts::E,
            ],
            &[12.298958390970709, -0.9585101385863923, -4.4805737703355],
            false,
        ),
        EigenFixture::new(
            "A4",
            3,
            &[
                1.0, 2.0, 3.0,
                4.0, 5.0, 6.0,
                7.0, 8.0, 9.0,
            ],
            &[16.116843969807043, 0.0, -1.1168439698070430],
            false,
        ),
        EigenFixture::new(
            "A5",
            5,
            &[
                1.0, 2.0, 3.0, 4.0, 5.0,
                6.0, 7.0, 8.0, 9.0, 10.0,
                11.0, 12.0, 13.0, 14.0, 15.0,
                16.0, 17.0, 18.0, 19.0, 20.0,
                21.0, 22.0, 23.0, 24.0, 25.0,
            ],
            &[68.64208073700240, 0.0, 0.0, 0.0, -3.6420807370024008],
            false,
        ),
        EigenFixture::new(
            "A6",
            5,
            &[
                1.962138439537238, 0.03219117137713706, 0.083862817159563, -0.155700691654753, 0.0707033370776169,
                0.03219117137713706, 0.8407278248542023, 0.689810816078236, 0.23401692081963357, -0.6655765501236198,
                0.0838628171595628, 0.689810816078236, 1.3024568091833602, 0.2765334214968566, 0.25051808693319155,
                -0.1557006916547532, 0.23401692081963357, 0.2765334214968566, 1.3505754332321778, 0.3451234157557794,
                0.07070333707761689, -0.6655765501236198, 0.25051808693319155, 0.3451234157557794, 1.5441014931930226,
            ],
            &[2.0, 2.0, 2.0, 1.0, 0.0],
            true,
        ),
    ]
}

/// Looks a fixture up by name (`"A1"` ... `"A6"`).
pub fn by_name(name: &str) -> Option<EigenFixture> {
    all().into_iter().find(|f| f.name == name)
}
