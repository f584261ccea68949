//! Print summaries for a fixed set of sample sensor packages.

use stride::{package, read_package};

fn main() -> Result<(), package::Error> {
    let packages: [(&str, &[f64]); 3] = [
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];

    for (code, readings) in packages {
        let workout = read_package(code, readings)?;
        println!("{}", workout.summary());
    }

    Ok(())
}
