pub mod client;
pub mod http;

pub use client::PointsSource;
#[cfg(test)]
pub use client::MockPointsSource;
pub use http::HttpPointsSource;
