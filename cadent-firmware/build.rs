use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Put memory.x where cortex-m-rt's link.x INCLUDE can find it.
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::copy("memory.x", out_dir.join("memory.x")).expect("copy memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
}
