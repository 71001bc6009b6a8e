// ABOUTME: Subcommand implementations for feline-cli
// ABOUTME: DER calculation from documents or flags, and feeding plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod der;
pub mod feeding;
