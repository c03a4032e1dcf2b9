//! Remote feed loading for feedcask.
//!
//! This crate provides:
//! - A narrow HTTP GET capability trait with a reqwest-backed default
//! - The remote feed loader and its wire-format mapper

pub mod http;
pub mod remote;

pub use http::{HttpClient, HttpConfig, HttpResponse, ReqwestHttpClient, TransportError};
pub use remote::{RemoteError, RemoteFeedLoader};
