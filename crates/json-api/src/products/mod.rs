//! Products

mod errors;
mod handlers;
mod responses;

pub(crate) use handlers::*;
pub(crate) use responses::ProductResponse;
