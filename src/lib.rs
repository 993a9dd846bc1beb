// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod models;
pub mod repo;
pub mod session;
pub mod store;
pub mod utils;
pub mod validate;
