use std::{fs::File, path::Path};

// The frontend embeds config.toml with include_str!, so it has to exist before compiling.
// An empty file is valid: every field falls back to its default.
fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let path = Path::new("config.toml");

    if !path.exists() {
        if let Err(err) = File::create(path) {
            println!("cargo:warning=could not create config.toml: {err}");
        }
    }
}
