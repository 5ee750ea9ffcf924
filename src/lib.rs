//! # docalign — Document Alignment Core
//!
//! Compares two free-form text documents, groups their content into
//! corresponding semantic units, and anchors oracle-supplied evidence text
//! back onto exact character spans of the source documents, tolerating
//! paraphrase and upstream extraction corruption.
//!
//! ## Architecture
//!
//! - **[`config`]** — Tuning values (chunk sizes, fuzzy thresholds, palette) with JSON loading
//! - **[`normalize`]** — Lowercase folding, word spans, token cleanup (leaf utilities)
//! - **[`extract`]** — Tiered regex extraction of structural units with byte offsets
//! - **[`chunk`]** — Overlapping word-window chunking for the bounded-context oracle
//! - **[`repair`]** — Invalid-escape repair of the oracle's serialized payload
//! - **[`oracle`]** — Declared schema of the oracle payload (out-of-scope classifier)
//! - **[`pairing`]** — Bookkeeping: stable pairing ids, deterministic colors, confidence
//! - **[`anchor`]** — Evidence anchoring: exact fast path + fuzzy word-overlap fallback
//! - **[`render`]** — Tagged segment rendering with collision resolution
//! - **[`run`]** — One-shot pipeline over two documents and a saved payload
//!
//! Everything is synchronous and pure over immutable inputs; the latency-bearing
//! oracle call happens outside this crate, between [`chunk`] and [`repair`].

pub mod anchor;
pub mod chunk;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod oracle;
pub mod pairing;
pub mod render;
pub mod repair;
pub mod run;
