//! Site configuration and home page slider

use kernel::id::SliderId;
use serde::{Deserialize, Serialize};

/// One counter of the home page statistics band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

/// Singleton site configuration (row id `config`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteConfig {
    pub logo: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub footer_text: String,
    pub stats: Vec<StatItem>,
}

impl SiteConfig {
    pub const ROW_ID: &'static str = "config";
}

/// Home page banner; `sort_order` is the position in the submitted list
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub slider_id: SliderId,
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub sort_order: i32,
}
