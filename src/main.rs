//! Puzzle Kernel entry point
//!
//! Native: prints one round as JSON, `puzzle-kernel <kind> [level] [seed]`.
//! Web: the browser loads the library and calls `newRound` instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use puzzle_kernel::KernelSettings;
    use puzzle_kernel::kernel::RoundSeed;
    use puzzle_kernel::platform::round_json;

    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(kind) = args.first() else {
        eprintln!("usage: puzzle-kernel <maze|laser|sequence|trail> [level] [seed]");
        std::process::exit(2);
    };
    let level = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);
    let seed = match args.get(2).and_then(|s| s.parse().ok()) {
        Some(seed) => seed,
        None => rand::random(),
    };

    log::info!("Puzzle kernel (native): {} level {} seed {}", kind, level, seed);

    let settings = KernelSettings::load();
    match round_json(kind, level, RoundSeed::new(seed), &settings) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
