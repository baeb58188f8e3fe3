/// Binary entrypoint for the `dist` executable.
///
/// Keeps the binary thin — all logic lives in the `dist_lib` crate so unit
/// tests can import library functions directly.
fn main() {
    dist_lib::run();
}
