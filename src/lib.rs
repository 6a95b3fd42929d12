//! BrandZ: turns a short company brief into a brand identity document using
//! Gemini, and serves it as a small web form.

pub mod brand;
pub mod brief;
pub mod clients;
pub mod config;
pub mod deserializers;
pub mod error;
pub mod generation;
pub mod http;
pub mod interpreter;
pub mod presentation;
pub mod prompts;

pub use brand::BrandIdentity;
pub use brief::{BrandBrief, Industry, Personality};
pub use config::Config;
pub use error::{BrandzError, Result};
