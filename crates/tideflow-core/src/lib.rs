//! tideflow core — 設定解決と共有データモデル
//!
//! CLI 層で組み立てた [`PromotionConfig`] を検証し、
//! 以後のすべての処理が参照する不変の [`PromotionRequest`] に解決する。
//! ネットワークアクセスはこのクレートでは一切行わない。

pub mod config;
pub mod error;
pub mod model;

pub use config::*;
pub use error::*;
pub use model::*;
