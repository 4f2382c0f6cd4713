// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_summary_text(size: usize) -> String {
    let base = "Here is the summary:\n\n### Highlights\n- **Engagement:** students stayed on task\n  - Especially during the *hands-on* lab\n  - Used `git` without help\n- Clear instructions\n\nOverall a __good__ session.\n\n";
    base.repeat(size)
}
