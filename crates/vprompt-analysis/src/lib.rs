//! Video analysis request/response protocol.
//!
//! This crate implements the one real integration boundary of VideoPrompt Pro:
//! a single structured-output call to the Gemini API that takes an uploaded
//! video and returns a segmented creative-prompt report.
//!
//! The flow is: build an [`AnalysisRequest`] from raw video bytes, submit it
//! through a [`GeminiClient`], and receive an `AnalysisReport` with
//! client-synthesized id and creation instant. One invocation performs exactly
//! one network attempt; retry policy, if any, belongs to the caller.

pub mod client;
pub mod error;
pub mod request;

pub use client::{GeminiClient, GeminiConfig};
pub use error::{AnalysisError, AnalysisResult};
pub use request::{AnalysisRequest, MAX_INLINE_VIDEO_BYTES};
