//! Core building blocks: request validation (`request`) and the slide
//! export sequence (`export`). These are consumed by the high-level `api`
//! module and are generic over the automation host so they run against fakes.
pub mod export;
pub mod request;
