// SPDX-License-Identifier: MPL-2.0
//! `iced_matte` is a desktop image background-removal demo built with the
//! Iced GUI framework.
//!
//! A single widget lets the user upload, drop, or pick a sample photograph,
//! shows a processing overlay with an elapsed-time stopwatch while an ONNX
//! portrait-matting model runs, and displays the resulting cut-out for
//! saving. The widget consumes all business state from [`matting::Context`].

#![doc(html_root_url = "https://docs.rs/iced_matte/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod matting;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
