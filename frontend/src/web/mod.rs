//! 原生 Web API 封装模块
//!
//! 此模块提供对浏览器原生 API 的轻量级封装，并实现核心库注入的各个接口。

mod http;
pub mod logger;
pub mod router;
mod storage;

pub use http::FetchClient;
pub use logger::ConsoleLogger;
pub use storage::BrowserStorage;
