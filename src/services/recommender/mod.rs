pub mod client;

pub use client::RecommenderClient;
