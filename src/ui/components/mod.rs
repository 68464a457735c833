// SPDX-License-Identifier: MPL-2.0
//! Small reusable UI components.

pub mod checkerboard;
