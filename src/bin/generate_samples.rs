//! Writes deterministic stand-ins for the four dashboard datasets under
//! `datasets/`, with the exact column headers the views require.
//!
//! Run once before the first `cargo run`:
//! `cargo run --bin generate_samples`

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Pick an index with the given relative weights.
    fn weighted(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let mut roll = self.next_f64() * total;
        for (i, w) in weights.iter().enumerate() {
            if roll < *w {
                return i;
            }
            roll -= w;
        }
        weights.len() - 1
    }
}

fn writer(path: &str) -> csv::Writer<std::fs::File> {
    csv::Writer::from_path(path).expect("Failed to create output file")
}

// ---------------------------------------------------------------------------
// Iris
// ---------------------------------------------------------------------------

fn write_iris(rng: &mut SimpleRng) {
    // (species, [sepal length, sepal width, petal length, petal width] as (mean, std))
    let species: [(&str, [(f64, f64); 4]); 3] = [
        (
            "Iris-setosa",
            [(5.01, 0.35), (3.42, 0.38), (1.46, 0.17), (0.24, 0.11)],
        ),
        (
            "Iris-versicolor",
            [(5.94, 0.52), (2.77, 0.31), (4.26, 0.47), (1.33, 0.20)],
        ),
        (
            "Iris-virginica",
            [(6.59, 0.64), (2.97, 0.32), (5.55, 0.55), (2.03, 0.27)],
        ),
    ];

    let path = "datasets/iris.csv";
    let mut w = writer(path);
    w.write_record([
        "Id",
        "SepalLengthCm",
        "SepalWidthCm",
        "PetalLengthCm",
        "PetalWidthCm",
        "Species",
    ])
    .expect("Failed to write header");

    let mut id = 0;
    for (name, features) in &species {
        for _ in 0..50 {
            id += 1;
            let mut record = vec![id.to_string()];
            record.extend(
                features
                    .iter()
                    .map(|&(mean, std)| format!("{:.1}", rng.gauss(mean, std).max(0.1))),
            );
            record.push((*name).to_string());
            w.write_record(&record).expect("Failed to write row");
        }
    }
    w.flush().expect("Failed to flush");
    println!("Wrote {id} rows to {path}");
}

// ---------------------------------------------------------------------------
// Titanic
// ---------------------------------------------------------------------------

fn write_titanic(rng: &mut SimpleRng) {
    const ROWS: usize = 600;
    // Survival odds per (class, sex), loosely matching the well-known data.
    let survival = [[0.37, 0.97], [0.16, 0.92], [0.14, 0.50]];
    let fare_mean = [84.0, 20.0, 13.0];
    let fare_std = [58.0, 12.0, 10.0];

    let path = "datasets/titanic.csv";
    let mut w = writer(path);
    w.write_record([
        "PassengerId",
        "Survived",
        "Pclass",
        "Name",
        "Sex",
        "Age",
        "Fare",
        "Embarked",
    ])
    .expect("Failed to write header");

    for id in 1..=ROWS {
        let class = rng.weighted(&[0.24, 0.21, 0.55]);
        let sex = rng.weighted(&[0.65, 0.35]); // 0 = male, 1 = female
        let survived = (rng.next_f64() < survival[class][sex]) as u8;

        // Roughly a fifth of recorded ages are missing.
        let age = if rng.next_f64() < 0.2 {
            String::new()
        } else {
            format!("{:.1}", rng.gauss(29.7, 14.5).clamp(0.4, 80.0))
        };
        let fare = rng.gauss(fare_mean[class], fare_std[class]).max(4.0);
        let embarked = ["S", "C", "Q"][rng.weighted(&[0.72, 0.19, 0.09])];

        w.write_record(&[
            id.to_string(),
            survived.to_string(),
            (class + 1).to_string(),
            format!("Passenger {id:03}"),
            ["male", "female"][sex].to_string(),
            age,
            format!("{fare:.4}"),
            embarked.to_string(),
        ])
        .expect("Failed to write row");
    }
    w.flush().expect("Failed to flush");
    println!("Wrote {ROWS} rows to {path}");
}

// ---------------------------------------------------------------------------
// Wine quality
// ---------------------------------------------------------------------------

struct WineProfile {
    path: &'static str,
    rows: usize,
    fixed_acidity: f64,
    volatile_acidity: f64,
    residual_sugar: f64,
    sulfur_dioxide: f64,
}

fn write_wine(rng: &mut SimpleRng, profile: &WineProfile) {
    let mut w = writer(profile.path);
    w.write_record([
        "fixed acidity",
        "volatile acidity",
        "citric acid",
        "residual sugar",
        "chlorides",
        "free sulfur dioxide",
        "total sulfur dioxide",
        "density",
        "pH",
        "sulphates",
        "alcohol",
        "quality",
    ])
    .expect("Failed to write header");

    for _ in 0..profile.rows {
        // Most wines are average; 5–7 dominates the score distribution.
        let quality = 3 + rng.weighted(&[0.01, 0.04, 0.38, 0.40, 0.14, 0.03]) as i64;
        let lift = quality as f64 - 5.5;

        // Alcohol pulls quality up, volatile acidity drags it down.
        let alcohol = (rng.gauss(10.4, 0.7) + 0.45 * lift).clamp(8.0, 14.9);
        let volatile = (rng.gauss(profile.volatile_acidity, 0.12) - 0.06 * lift).max(0.08);
        let fixed = rng.gauss(profile.fixed_acidity, 1.2).max(3.8);
        let citric = rng.gauss(0.3, 0.15).clamp(0.0, 1.0);
        let sugar = rng.gauss(profile.residual_sugar, 1.4).max(0.6);
        let chlorides = rng.gauss(0.07, 0.03).max(0.01);
        let free_so2 = rng.gauss(profile.sulfur_dioxide, 10.0).max(1.0);
        let total_so2 = free_so2 + rng.gauss(profile.sulfur_dioxide * 2.0, 20.0).max(5.0);
        let density = rng.gauss(0.9967, 0.0019) - 0.0012 * (alcohol - 10.4);
        let ph = rng.gauss(3.31, 0.15).clamp(2.7, 4.0);
        let sulphates = rng.gauss(0.65, 0.15).max(0.3);

        w.write_record(&[
            format!("{fixed:.1}"),
            format!("{volatile:.3}"),
            format!("{citric:.2}"),
            format!("{sugar:.1}"),
            format!("{chlorides:.3}"),
            format!("{free_so2:.0}"),
            format!("{total_so2:.0}"),
            format!("{density:.5}"),
            format!("{ph:.2}"),
            format!("{sulphates:.2}"),
            format!("{alcohol:.1}"),
            quality.to_string(),
        ])
        .expect("Failed to write row");
    }
    w.flush().expect("Failed to flush");
    println!("Wrote {} rows to {}", profile.rows, profile.path);
}

fn main() {
    std::fs::create_dir_all("datasets").expect("Failed to create datasets directory");

    let mut rng = SimpleRng::new(42);
    write_iris(&mut rng);
    write_titanic(&mut rng);
    write_wine(
        &mut rng,
        &WineProfile {
            path: "datasets/winequality_red.csv",
            rows: 500,
            fixed_acidity: 8.3,
            volatile_acidity: 0.53,
            residual_sugar: 2.5,
            sulfur_dioxide: 16.0,
        },
    );
    write_wine(
        &mut rng,
        &WineProfile {
            path: "datasets/winequality_white.csv",
            rows: 700,
            fixed_acidity: 6.9,
            volatile_acidity: 0.28,
            residual_sugar: 6.4,
            sulfur_dioxide: 35.0,
        },
    );
}
