//! Custom pointer: a lagging color trail drawn on a canvas and a dot that
//! snaps onto links, buttons and inputs.

pub mod component;
pub mod engine;
pub mod hover;
pub mod spring;
pub mod trail;

pub use component::Cursor;
