//! # Copyforge Core
//!
//! The "Newsroom" of the Copyforge system - a staged content-creation
//! pipeline in which five role-specialized agents pass a document through
//! successive transformations.
//!
//! ## Architecture
//!
//! - `agents/` - the five stages (Coordinator, Researcher, Writer, Editor, SEO)
//! - `models/` - requirements and pipeline configuration
//! - `tools/` - deterministic analyzers and the search collaborator
//! - `pipeline/` - stage sequencing, state machine, and event streaming
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use copyforge_core::models::{PipelineConfig, Requirements};
//! use copyforge_core::pipeline::ContentPipeline;
//! use copyforge_core::tools::HttpSearchProvider;
//!
//! let config = PipelineConfig::default();
//! let search = Arc::new(HttpSearchProvider::new(config.searx_url.as_deref())?);
//! let mut pipeline = ContentPipeline::new(config, search);
//! let run = pipeline.run(&Requirements::new("Remote Work")).await?;
//! println!("{}", run.artifacts.seo.optimized_content);
//! ```

pub mod agents;
pub mod models;
pub mod pipeline;
pub mod tools;
