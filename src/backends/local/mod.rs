// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod tools;

pub use factory::LocalToolFactory;
pub use tools::*;
