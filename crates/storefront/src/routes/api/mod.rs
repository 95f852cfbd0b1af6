//! JSON API handlers for agents.

pub mod buy;
pub mod product;
pub mod search;
