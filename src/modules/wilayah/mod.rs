mod client;

pub use client::WilayahClient;
