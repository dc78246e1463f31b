const STATIC_DIR: &str = "static";

fn main() {
    // The embedded assets are not tracked by cargo itself.
    println!("cargo:rerun-if-changed={STATIC_DIR}");
    for entry in walkdir::WalkDir::new(STATIC_DIR)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        println!("cargo:rerun-if-changed={}", entry.path().display());
    }
}
