//! dailytalk-core: Core library for the DailyTalk activity provider
//!
//! This crate holds the provider's domain logic, independent of any HTTP
//! framing:
//!
//! - **Activity model** - [`Activity`], [`ActivityKind`], and the
//!   [`ActivityFactory`] that builds an activity pre-bound to its kind's
//!   scoring rule
//! - **Evaluation** - the [`EvaluationStrategy`] trait and its three
//!   implementations, plus [`Submission`] coercion and the
//!   [`EvaluationResult`] value type
//! - **Registry** - [`ActivityService`], the in-memory map of deployed
//!   activities with create-or-replace and lookup
//!
//! # Quick Start
//!
//! ```
//! use dailytalk_core::ActivityService;
//! use serde_json::json;
//!
//! # fn example() -> dailytalk_core::ActivityResult<()> {
//! let mut service = ActivityService::new();
//! let launch_url = service.deploy("DTALK-DEMO-001", "quiz", "http://localhost:7780")?;
//! assert!(launch_url.ends_with("/activity/quiz/DTALK-DEMO-001"));
//!
//! let submission = json!({"correct": 3, "total": 4, "seconds": 30});
//! let result = service.submit("DTALK-DEMO-001", Some(&submission))?;
//! assert_eq!(result.score, 75);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod activity;
pub mod error;
pub mod evaluation;
pub mod service;

// Re-export key types for convenience
pub use activity::{Activity, ActivityFactory, ActivityKind};
pub use error::{ActivityError, ActivityResult};
pub use evaluation::{EvaluationResult, EvaluationStrategy, Submission};
pub use service::ActivityService;
