#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use atelier::kernel::clarify::EntropyScores;
use atelier::kernel::state::ConversationState;
use atelier::services::{EntropySource, StyleRewriter};
use atelier::Intent;
use std::sync::{Arc, Mutex};
use strum::EnumCount;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// One-hot classifier output for `intent`.
pub fn one_hot(intent: Intent) -> Vec<f32> {
    let mut distribution = vec![0.0; Intent::COUNT];
    distribution[intent as usize] = 1.0;
    distribution
}

/// Entropy source returning fixed scores and counting calls.
#[derive(Clone, Default)]
pub struct FixedEntropy {
    pub scores: EntropyScores,
    pub calls: Arc<Mutex<u32>>,
}

impl FixedEntropy {
    pub fn new(scores: EntropyScores) -> Self {
        Self {
            scores,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl EntropySource for FixedEntropy {
    async fn entropy(&self, _state: &ConversationState) -> Result<EntropyScores> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.scores.clone())
    }
}

pub struct FailingEntropy;

#[async_trait]
impl EntropySource for FailingEntropy {
    async fn entropy(&self, _state: &ConversationState) -> Result<EntropyScores> {
        Err(anyhow!("recommender returned 503"))
    }
}

pub struct FailingRewriter;

#[async_trait]
impl StyleRewriter for FailingRewriter {
    async fn rewrite(&self, _text: &str, _state: &ConversationState, _moment: bool) -> Result<String> {
        Err(anyhow!("connection reset"))
    }
}

/// Answers every rewrite with blank text.
pub struct BlankRewriter;

#[async_trait]
impl StyleRewriter for BlankRewriter {
    async fn rewrite(&self, _text: &str, _state: &ConversationState, _moment: bool) -> Result<String> {
        Ok("  ".to_string())
    }
}

/// Upper-cases text and remembers every call's `(text, recommendation_moment)`.
#[derive(Clone, Default)]
pub struct RecordingRewriter {
    pub calls: Arc<Mutex<Vec<(String, bool)>>>,
}

impl RecordingRewriter {
    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StyleRewriter for RecordingRewriter {
    async fn rewrite(&self, text: &str, _state: &ConversationState, moment: bool) -> Result<String> {
        self.calls.lock().unwrap().push((text.to_string(), moment));
        Ok(text.to_uppercase())
    }
}

/// Serves exactly one HTTP request with the given status line and JSON body.
/// Returns the base URL and a handle resolving to the raw request text.
pub async fn serve_once(status: &str, body: &str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });

    (format!("http://{}", addr), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.trim()
                        .eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Base URL nothing listens on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
