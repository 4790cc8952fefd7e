#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Fixed reference instant: Friday 2025-09-26 08:00 in New York.
pub const NOW: &str = "2025-09-26T12:00:00Z";

pub fn rsm() -> Command {
    cargo_bin_cmd!("rstudiometrics")
}

/// A temp directory holding export files and a (possibly absent) config.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn path_str(&self, name: &str) -> String {
        self.path(name).to_string_lossy().to_string()
    }

    pub fn write(&self, name: &str, content: &str) -> String {
        let path = self.path(name);
        fs::write(&path, content).expect("write fixture");
        path.to_string_lossy().to_string()
    }

    pub fn write_json(&self, name: &str, value: &Value) -> String {
        self.write(name, &serde_json::to_string_pretty(value).expect("serialize"))
    }

    pub fn logos(&self) -> String {
        self.write_json("logos.json", &logos_export())
    }

    pub fn mockups(&self) -> String {
        self.write_json("mockups.json", &mockups_export())
    }

    pub fn stores(&self) -> String {
        self.write_json("stores.json", &stores_export())
    }

    /// Command with the config pointed inside the temp dir and the clock fixed.
    pub fn cmd(&self) -> Command {
        let mut cmd = rsm();
        cmd.args(["--config", &self.path_str("rstudiometrics.conf"), "--now", NOW]);
        cmd
    }
}

/// Logos base, API page shape. Business-hours processing times:
/// rush 2.0h and 4.0h, Lax.Ink 1.5h, new 1.0h (Fri 16:30 → Mon 09:30).
/// `recArchive` is older than the 30-day window.
pub fn logos_export() -> Value {
    json!({
        "records": [
            {"id": "recL1", "fields": {
                "Account Name": "Riverside Lacrosse",
                "Description": "Two colour front print",
                "Rush Order": true,
                "Rep Email": "alice@studio.com",
                "Created": "2025-09-16T14:00:00.000Z",
                "Last Modified": "2025-09-16T16:00:00.000Z"
            }},
            {"id": "recL2", "fields": {
                "Account Name": "Hillcrest FC",
                "Rush Order": true,
                "Rep Email": "alice@studio.com",
                "Created": "2025-09-17T13:00:00.000Z",
                "Last Modified": "2025-09-17T17:00:00.000Z"
            }},
            {"id": "recL3", "fields": {
                "Account Name": "Lakeside Hockey",
                "VariationOfCheck": "Lax.Ink",
                "Rep Email": "bob@studio.com",
                "Created": "2025-09-18T13:00:00.000Z",
                "Last Modified": "2025-09-18T14:30:00.000Z"
            }},
            {"id": "recL4", "fields": {
                "Account Name": "Northside Soccer",
                "Rep Email": "bob@studio.com",
                "Created": "2025-09-19T20:30:00.000Z",
                "Last Modified": "2025-09-22T13:30:00.000Z"
            }},
            {"id": "recL5", "fields": {
                "Account Name": "Westview Baseball",
                "Created": "2025-09-22T14:00:00.000Z"
            }},
            {"id": "recArchive", "fields": {
                "Account Name": "Archive Club",
                "Rush Order": true,
                "Rep Email": "carol@studio.com",
                "Created": "2025-07-01T14:00:00.000Z",
                "Last Modified": "2025-07-01T15:00:00.000Z"
            }}
        ],
        "offset": "itrNext"
    })
}

/// Mockups base, bare array shape.
pub fn mockups_export() -> Value {
    json!([
        {"id": "recM1", "fields": {
            "Mockup Name": "Riverside hoodie",
            "Status": "Sent to Production",
            "Product Types": ["Hoodie"],
            "Designer Email": "dana@studio.com",
            "Created Time": "2025-09-10T15:00:00.000Z"
        }},
        {"id": "recM2", "fields": {
            "Mockup Name": "Hillcrest tee",
            "Status": "Sent to Production",
            "Product Types": ["Tee"],
            "Designer Email": "eli@studio.com",
            "Created Time": "2025-09-10T18:00:00.000Z"
        }},
        {"id": "recM3", "fields": {
            "Mockup Name": "Lakeside hoodie",
            "Status": "Updated Artwork",
            "Product Types": ["Hoodie"],
            "Designer Email": "dana@studio.com",
            "Created Time": "2025-09-12T15:00:00.000Z"
        }},
        {"id": "recM4", "fields": {
            "Mockup Name": "Untitled",
            "Created Time": "2025-09-15T15:00:00.000Z"
        }}
    ])
}

/// Store orders: one deadline in two days, one overdue, one far out.
pub fn stores_export() -> Value {
    json!({
        "records": [
            {"id": "recS1", "fields": {
                "Store Name": "Riverside Spring Store",
                "League": "U12",
                "Order Deadline": "2025-09-28T12:00:00.000Z",
                "Created On": "2025-09-20T12:00:00.000Z"
            }},
            {"id": "recS2", "fields": {
                "Store Name": "Hillcrest Fan Shop",
                "Order Deadline": "2025-09-20",
                "Created On": "2025-09-01T12:00:00.000Z"
            }},
            {"id": "recS3", "fields": {
                "Store Name": "Lakeside Winter Store",
                "Order Deadline": "2025-10-20",
                "Created On": "2025-09-25T12:00:00.000Z"
            }}
        ]
    })
}
