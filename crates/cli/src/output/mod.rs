// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for scan results.

pub mod json;
pub mod text;

pub use json::format_json;
pub use text::format_text;
