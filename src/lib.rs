// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod error;
pub mod ledger;
pub mod models;
pub mod post;
pub mod store;
pub mod summary;
pub mod utils;
