// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Strada Core
//!
//! Foundational crate of the game: the procedural ground mesh, the math it is
//! built on, the fixed camera, and the contracts a rendering backend and a
//! window implement. Nothing here talks to a GPU or a windowing system.

pub mod camera;
pub mod math;
pub mod platform;
pub mod primitives;
pub mod renderer;
pub mod telemetry;
pub mod track;
pub mod utils;

pub use camera::{FixedCamera, ViewInfo};
pub use track::TrackMesh;
pub use utils::timer::Stopwatch;
