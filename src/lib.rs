//! Huekit Library
//!
//! This library provides a color harmony and palette engine: conversion
//! between hex, RGB and HSL, harmony generation, a lockable palette with a
//! regeneration protocol, and textual export formats.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod harmony;
pub mod models;
