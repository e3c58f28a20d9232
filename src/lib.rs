// lib.rs - Crate Root
// Multi-model text generation with health tracking and fallback. The
// manager wraps any number of backends, prefers the healthiest one and
// retries across the rest when a call fails or runs out of quota.

pub mod backend; // TextBackend trait and backend error taxonomy
pub mod config;  // modelconf.txt loading and fallback settings
pub mod gemini;  // Google Generative Language REST backend
pub mod manager; // Backend selection, health state and retry loop

pub use backend::{BackendError, TextBackend};
pub use config::{BackendSpec, FallbackSettings, ManagerConfig};
pub use manager::{FallbackManager, GenerateError, ModelStatus};
