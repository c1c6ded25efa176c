// Adapters layer: concrete implementations of the cart ports (http, storage, notifications).

pub mod http;
pub mod notify;
pub mod storage;
