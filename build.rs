/// Build script for tinsel
/// Embeds build metadata shown by `tinsel version`

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    // Capture git hash, if built from a checkout
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|hash| hash.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=TINSEL_GIT_HASH={hash}");
}
