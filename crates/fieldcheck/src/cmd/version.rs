use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

/// Build provenance captured by `build.rs`; `unknown` when a probe failed.
fn provenance() -> [(&'static str, &'static str); 3] {
    [
        ("target", option_env!("FIELDCHECK_BUILD_TARGET").unwrap_or("unknown")),
        ("rustc", option_env!("RUSTC_VERSION").unwrap_or("unknown")),
        ("git_hash", option_env!("GIT_HASH").unwrap_or("unknown")),
    ]
}

pub fn run(args: VersionArgs) -> CliResult<i32> {
    println!("fieldcheck {}", env!("CARGO_PKG_VERSION"));
    if args.extended {
        for (key, value) in provenance() {
            println!("{key}: {value}");
        }
        println!("records: ean8, ean13, movie, director");
    }
    Ok(SUCCESS)
}
