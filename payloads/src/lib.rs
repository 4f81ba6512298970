//! Shared types for the MovieNight API, used by both the frontend and the
//! identity backend.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};

#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct UserId(pub Uuid);
