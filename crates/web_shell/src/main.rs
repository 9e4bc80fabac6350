//! Binary entrypoint for the browser-hosted desktop shell.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    web_shell::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary targets the browser/WASM workflow. Build `web_shell_app` for wasm32 with the `csr` feature (e.g. via trunk)."
    );
}
