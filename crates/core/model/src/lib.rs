//! Market data model for ShrivenQ
//!
//! In-memory candle series and the analytics derived from them:
//! - OHLCV candles and time-ordered candle queues
//! - OHLC series with price averages (HL2, HLC3, OHLC4)
//! - Heikin Ashi smoothing
//! - Per-pair dataframes with custom indicator columns
//! - Account balances and equity
//!
//! Nothing here performs I/O. Every value is owned by a single writer; use
//! `&mut` access (or a lock held by the caller) to mutate a series.

#![deny(clippy::all)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod account;
pub mod asset;
pub mod candle;
pub mod dataframe;
pub mod error;
pub mod heikin_ashi;
pub mod ohlc;
pub mod queue;
pub mod series;
pub mod settings;

pub use account::{Account, Balance};
pub use asset::AssetInfo;
pub use candle::{Candle, OrderedCandle};
pub use dataframe::{Dataframe, MetadataWindow};
pub use error::{ModelError, Result};
pub use heikin_ashi::HeikinAshi;
pub use ohlc::{Bar, Ohlc, SeriesKind};
pub use queue::CandleQueue;
pub use series::Series;
pub use settings::{Settings, TelegramSettings};
