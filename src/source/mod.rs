/// Record source module
///
/// The remote catalog that supplies page-shaped batches:
/// - JSON response shapes and field defaulting (wire.rs)
/// - The async HTTP client (client.rs)
///
/// Latency and failure are handled here; the browser session only sees
/// `Result<Batch, FetchError>`.

pub mod wire;
pub mod client;

pub use client::ArticClient;
