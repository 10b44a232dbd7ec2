#![forbid(unsafe_code)]

fn main() -> std::process::ExitCode {
    let code = gohash::run();
    std::process::ExitCode::from(code)
}
