//! The product catalog the demo filters.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sift::{Record, RecordEnum, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl RecordEnum for Color {
    fn discriminant(&self) -> u32 {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Blue => 2,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl RecordEnum for Size {
    fn discriminant(&self) -> u32 {
        match self {
            Size::Small => 0,
            Size::Medium => 1,
            Size::Large => 2,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

/// A catalog entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Product {
            name: name.into(),
            color,
            size,
        }
    }
}

impl Record for Product {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            "name" => Value::String(&self.name),
            "color" => self.color.value(),
            "size" => self.size.value(),
            _ => Value::None,
        }
    }
}

/// The three products every run starts from unless `--catalog` is given.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

/// Reads a catalog from a JSON array of products.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog {}", path.display()))
}
