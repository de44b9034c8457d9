//! tideflow nexus — Nexus 検索 API クライアント
//!
//! リリースタグに紐づくコンポーネントを Nexus の検索 API から取得し、
//! docker フォーマットのコンポーネント（＝コンテナイメージ）だけに
//! 絞り込む。ここで見つかったコンポーネントが後段のプロモーション対象になる。

pub mod client;
pub mod error;
pub mod model;

pub use client::*;
pub use error::*;
pub use model::*;
