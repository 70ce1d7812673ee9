// `RUST_LOG_PRETTY=1 cargo build` switches the log output to the multi-line format.
fn main() {
    println!("cargo::rerun-if-env-changed=RUST_LOG_PRETTY");
    println!("cargo::rustc-check-cfg=cfg(log_pretty)");
    if matches!(std::env::var("RUST_LOG_PRETTY").as_deref(), Ok("1")) {
        println!("cargo::rustc-cfg=log_pretty");
    }
}
