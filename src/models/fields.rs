//! Airtable field names used by the studio bases.

// Mockups
pub const MOCKUP_CREATED: &str = "Created Time";
pub const MOCKUP_NAME: &str = "Mockup Name";
pub const STATUS: &str = "Status";
pub const PRODUCT_TYPES: &str = "Product Types";
pub const DESIGNER_EMAIL: &str = "Designer Email";

// Logos
pub const LOGO_CREATED: &str = "Created";
pub const LOGO_LAST_MODIFIED: &str = "Last Modified";
pub const RUSH_ORDER: &str = "Rush Order";
pub const VARIATION_OF_CHECK: &str = "VariationOfCheck";
pub const REP_EMAIL: &str = "Rep Email";
pub const ACCOUNT_NAME: &str = "Account Name";
pub const DESCRIPTION: &str = "Description";

// Store orders
pub const STORE_CREATED: &str = "Created On";
pub const STORE_NAME: &str = "Store Name";
pub const LEAGUE: &str = "League";
pub const PRINT_TYPES: &str = "Print Type (from Print Types)";
pub const ORDER_DEADLINE: &str = "Order Deadline";
