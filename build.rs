// RustPixel Lessons
// copyright zipxing@hotmail.com 2022～2025

fn main() {
    use cfg_aliases::cfg_aliases;

    cfg_aliases! {
        wasm: { target_arch = "wasm32" },
        sdl_backend: { all(feature = "sdl", not(wasm)) },
    }
}
