//! Ambient particle field engine for decorative canvas backgrounds.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Each mounted
//! `<canvas>` gets its own engine: a field of drifting points that wrap at the
//! surface edges and scatter away from the pointer. The host page is
//! responsible only for mounting and unmounting a [`web::ParticleSurface`];
//! everything else (sizing, reseeding, the frame loop, event wiring) lives here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | Particle set, density law, physics step and draw pass |
//! | [`particle`] | Particle record and palette colors |
//! | [`pointer`] | Per-surface pointer state used as the repulsion source |
//! | [`driver`] | Mount/frame/resize/unmount state machine behind the [`driver::Host`] seam |
//! | [`render`] | [`render::Renderer`] trait, recording renderer, 2D canvas renderer |
//! | [`web`] | wasm-bindgen surface that binds a driver to a real canvas |
//! | [`config`] | Tunable field parameters with defaults from [`consts`] |
//! | [`geom`] | `Point` and `Size` |
//! | [`error`] | Engine error type |
//! | [`consts`] | Default numeric constants and palette strings |

pub mod config;
pub mod consts;
pub mod driver;
pub mod error;
pub mod field;
pub mod geom;
pub mod particle;
pub mod pointer;
pub mod render;
pub mod web;
