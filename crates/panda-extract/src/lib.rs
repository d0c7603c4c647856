//! panda-extract
//!
//! Batch extraction of title/author/e-mail triples from scientific article
//! PDFs. The first pages of each PDF are read, sent to a chat model with a
//! fixed instruction template, and the Markdown table that comes back is
//! parsed into rows. Per-file failures become error records; one run always
//! ends in a single report, rendered as CSV sheets.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use panda_extract::batch::BatchRunner;
//! use panda_extract::client::OpenAiClient;
//! use panda_extract::config::Config;
//! use panda_extract::models::UploadedFile;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = Arc::new(OpenAiClient::new(config.clone())?);
//!     let runner = BatchRunner::new(client, &config);
//!
//!     let files = vec![UploadedFile::new("artigo.pdf", std::fs::read("artigo.pdf")?)];
//!     let report = runner.run(files).await?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
pub mod pdf;
pub mod prompt;

pub use batch::BatchRunner;
pub use client::OpenAiClient;
pub use config::Config;
pub use error::{BatchError, ClientError, ExtractError};
