//! Core contracts for Mindsum: the mindmap tree model, the response parser
//! that recovers it from raw LLM replies, the provider trait, and the shared
//! prompt. Everything here is synchronous and pure except the provider trait
//! itself, whose implementations live in `mindsum-providers`.

pub mod error;
pub mod parse;
pub mod prompt;
pub mod traits;
pub mod types;

pub use error::{MindsumError, ParseStage};
pub use parse::parse_response;
pub use prompt::{user_prompt, MINDMAP_SYSTEM_PROMPT};
pub use traits::Provider;
pub use types::{MindmapNode, ProviderKind, SummarizeRequest, SummarizeResult};
