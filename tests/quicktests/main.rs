//! Property tests exercising the public `Tree` API.

mod properties;
