use crate::models::fields;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// The three Airtable bases the studio tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Mockups,
    Logos,
    Stores,
}

/// How a table column obtains its cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Raw field text
    Field,
    /// Calendar date of a timestamp field
    Date,
    /// Local part of an e-mail field
    Rep,
    /// Logo priority badge
    Priority,
    /// Business-hours time between created and last modified
    ProcessingTime,
}

#[derive(Debug, Clone, Copy)]
pub struct TableColumn {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
}

const fn col(key: &'static str, label: &'static str, kind: ColumnKind) -> TableColumn {
    TableColumn { key, label, kind }
}

const MOCKUP_COLUMNS: &[TableColumn] = &[
    col(fields::MOCKUP_NAME, "Mockup Name", ColumnKind::Field),
    col(fields::PRODUCT_TYPES, "Product Type", ColumnKind::Field),
    col(fields::STATUS, "Status", ColumnKind::Field),
    col(fields::DESIGNER_EMAIL, "Designer", ColumnKind::Field),
    col(fields::MOCKUP_CREATED, "Created", ColumnKind::Date),
];

const LOGO_COLUMNS: &[TableColumn] = &[
    col(fields::ACCOUNT_NAME, "Account Name", ColumnKind::Field),
    col(fields::DESCRIPTION, "Description", ColumnKind::Field),
    col("Priority", "Priority", ColumnKind::Priority),
    col(fields::REP_EMAIL, "Rep", ColumnKind::Rep),
    col("Processing Time", "Processing Time", ColumnKind::ProcessingTime),
    col(fields::LOGO_CREATED, "Created", ColumnKind::Date),
];

const STORE_COLUMNS: &[TableColumn] = &[
    col(fields::STORE_NAME, "Store Name", ColumnKind::Field),
    col(fields::LEAGUE, "League", ColumnKind::Field),
    col(fields::PRINT_TYPES, "Print Types", ColumnKind::Field),
    col(fields::ORDER_DEADLINE, "Deadline", ColumnKind::Date),
    col(fields::STORE_CREATED, "Created", ColumnKind::Date),
];

impl Source {
    /// Field holding the creation timestamp, used for windowing and series.
    pub fn date_field(&self) -> &'static str {
        match self {
            Source::Mockups => fields::MOCKUP_CREATED,
            Source::Logos => fields::LOGO_CREATED,
            Source::Stores => fields::STORE_CREATED,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Source::Mockups => "Mockups",
            Source::Logos => "Logos",
            Source::Stores => "Store Orders",
        }
    }

    pub fn columns(&self) -> &'static [TableColumn] {
        match self {
            Source::Mockups => MOCKUP_COLUMNS,
            Source::Logos => LOGO_COLUMNS,
            Source::Stores => STORE_COLUMNS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Mockups => "mockups",
            Source::Logos => "logos",
            Source::Stores => "stores",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
