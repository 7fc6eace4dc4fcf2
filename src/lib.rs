//! # usuarios-web
//!
//! Leptos + WASM front-end for the user directory page. Fetches a greeting
//! and the user list from the backend REST API on `localhost:5000` and
//! renders them as a single page.
//!
//! This crate contains the root application component, the home page,
//! presentation components, shared view state, and the REST client helpers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
