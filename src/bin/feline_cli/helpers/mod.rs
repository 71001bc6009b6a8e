// ABOUTME: Shared helpers for feline-cli subcommands
// ABOUTME: Output rendering for text and JSON formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
