// Copyright (c) Pennybook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod currency;
pub mod dashboard;
pub mod investments;
pub mod reports;
pub mod session;
pub mod transactions;
