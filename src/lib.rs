//! Marquee selection engine for pointer-driven hosts.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but the
//! core is host-agnostic: translating raw pointer events into a live
//! selection rectangle, normalizing coordinates into container-local space,
//! and deciding which candidate items collide with the rectangle under a
//! configurable policy. The host layer is responsible only for wiring
//! pointer events to the engine and rendering the overlay box from the
//! emitted [`engine::SelectionUpdate`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`geom`] | Points, the raw selection rectangle, and normalized bounds |
//! | [`input`] | The drag gesture state machine |
//! | [`item`] | Candidate item ids and the bounding-box lookup capability |
//! | [`hit`] | Collision policies and candidate evaluation |
//! | [`dom`] | Live DOM measurement (container origin, item boxes) |
//! | [`wasm`] | `#[wasm_bindgen]` surface for plain JavaScript hosts |

pub mod dom;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod item;
pub mod wasm;
