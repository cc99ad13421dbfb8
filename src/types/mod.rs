// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod scalar;

pub use scalar::Fixed;
