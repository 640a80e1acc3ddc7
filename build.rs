fn main() {
    // Bindings for the normalizer are declared with proc-macros in
    // uniffi_bindings.rs (uniffi::setup_scaffolding!), there is no UDL file
    println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
