pub mod client;
pub mod credentials;
pub mod error;
pub mod folder;
pub mod options;
pub mod pagination;
pub mod pictures;
pub mod prelude;
pub mod video;

#[cfg(test)]
mod tests {
    pub fn init() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| String::from("debug")))
            .try_init();
    }
}
