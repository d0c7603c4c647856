//! Data models for the extraction pipeline and the OpenAI wire format.
//!
//! Wire types use `#[serde(default)]` for fields the API may omit.

mod api;
mod report;
mod row;

pub use api::{
    BillingUsage, ChatChoice, ChatMessage, ChatRequest, ChatResponse, Completion, Role,
    TokenUsage,
};
pub use report::{BatchReport, ErrorRecord, UsageSummary};
pub use row::{ArticleRow, UploadedFile};
