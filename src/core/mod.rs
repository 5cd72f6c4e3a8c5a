// envfile-rs: Container Environment File Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core environment modules.
//!
//! ```text
//!              core
//!               |
//!               v
//!              env
//!               |
//!     +---------+---------+
//!     v         v         v
//!   Env     image parser  names
//!  ordered  KEY=VALUE     POSIX check
//! ```

pub mod env;
