// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Application services for explorer front-ends: a keyed config store port
//! and the startup preferences read through it. UI session state is never
//! stored here.

pub mod config;
pub mod config_port;
pub mod prefs;
