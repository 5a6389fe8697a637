//! HTTP Handlers

mod ping;
mod product;
mod promo_code;
mod purchase;

pub use ping::*;
pub use product::*;
pub use promo_code::*;
pub use purchase::*;
