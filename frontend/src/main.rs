fn main() {
    #[cfg(target_arch = "wasm32")]
    tutorlink_frontend::boot();
}
