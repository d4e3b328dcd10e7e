use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let spec = root.join("tests").join("spec.txt");
    let fixtures = root.join("tests").join("fixtures");

    if let Err(err) = spec2fixtures::run(&spec, &fixtures) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
