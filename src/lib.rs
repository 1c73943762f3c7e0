//! Palate: ingredient association rules and content-based song
//! recommendations.
//!
//! Two independent pipelines share one crate:
//!
//! - **cuisine**: load recipes, summarise them per cuisine, and mine
//!   ingredient association rules with Apriori for a queried cuisine;
//! - **songs**: load product metadata, profile its columns, and recommend
//!   songs by TF-IDF cosine similarity of their titles and descriptions.
//!
//! # Quick Start
//!
//! ```
//! use palate::mining::Apriori;
//!
//! let baskets = vec![
//!     vec!["soy sauce", "ginger", "garlic"],
//!     vec!["soy sauce", "ginger"],
//!     vec!["tortilla", "cumin"],
//!     vec!["tortilla", "lime"],
//! ];
//!
//! let result = Apriori::new()
//!     .with_min_support(0.25)
//!     .with_min_confidence(0.46)
//!     .with_min_lift(2.0)
//!     .mine(&baskets)
//!     .expect("thresholds are valid");
//!
//! let best = result.top_itemsets(1);
//! assert_eq!(best[0].items, ["soy sauce", "ginger"]);
//! ```
//!
//! # Modules
//!
//! - [`mining`]: Apriori frequent itemsets and association rules
//! - [`cuisine`]: recipe loading, statistics and per-cuisine analysis
//! - [`text`]: tokenization, stop words, TF-IDF and cosine similarity
//! - [`recommend`]: content-based ranking over a text corpus
//! - [`songs`]: product metadata loading, exploration and CSV export
//! - [`session`]: interactive query loops
//! - [`report`]: terminal rendering of statistics
//! - [`config`]: thresholds and file configuration

pub mod config;
pub mod cuisine;
pub mod error;
pub mod mining;
pub mod recommend;
pub mod report;
pub mod session;
pub mod songs;
pub mod text;

pub use error::{PalateError, Result};
