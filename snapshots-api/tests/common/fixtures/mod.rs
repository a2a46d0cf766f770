//! This module provides reusable test utilities:
//! - Mock bucket listing server
//! - Service and router builders
//! - Common snapshot object names

// Allow unused code in test fixtures - not every suite uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_bucket;
pub mod test_data;

// Re-export commonly used items
pub use mock_bucket::MockBucketServer;
pub use test_data::*;
