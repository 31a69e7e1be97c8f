//! HTTP protocol layer module
//!
//! Response builders shared by every API handler, decoupled from the store.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_413_response, build_500_response, build_json_response,
    build_options_response,
};
