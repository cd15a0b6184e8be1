// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod demo;
pub mod ids;
pub mod model;
pub mod state;
pub mod store;
pub mod tabs;

pub use demo::*;
pub use ids::*;
pub use model::*;
pub use state::*;
pub use store::*;
pub use tabs::*;
