pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{
            auth::{mock_token_error_response, mock_token_response},
            message::mock_message,
        },
        TestBuilder, TestContext, TestError,
    };
}
