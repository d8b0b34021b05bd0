use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=NIL_TEST");
    println!("cargo:rustc-check-cfg=cfg(integration_test)");
    if let Ok(v) = env::var("NIL_TEST") {
        println!("cargo:rustc-cfg=integration_test");
        for c in v.split(',').filter(|c| !c.is_empty()) {
            println!("cargo:rustc-check-cfg=cfg({})", c);
            println!("cargo:rustc-cfg={}", c);
        }
    }
}
