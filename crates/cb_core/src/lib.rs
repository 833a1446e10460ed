pub mod card;
pub mod citation;
pub mod error;
pub mod excerpt;
pub mod extract;
pub mod text;
pub mod types;

pub use card::generate_card;
pub use error::{Error, Result};
pub use types::{ArticleSnapshot, Card};

use std::sync::Once;

static INIT: Once = Once::new();

/// One-time resource initialization: compiles the shared regex set up front
/// so the first request doesn't pay for it. Idempotent; call at process start.
pub fn init() {
    INIT.call_once(|| {
        lazy_static::initialize(&text::WHITESPACE_RUN);
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_init_is_idempotent() {
        super::init();
        super::init();
    }
}
