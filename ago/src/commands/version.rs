/// Get the version string for ago and libago
pub fn get_version_string() -> String {
    format!(
        "ago {}\nlibago {}",
        env!("CARGO_PKG_VERSION"),
        libago::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
