//! Canonical Column Names
//!
//! The names all alias variants collapse to after normalization. Every
//! downstream consumer addresses columns through these constants.

/// Sales figure per item/outlet row
pub const ITEM_OUTLET_SALES: &str = "Item_Outlet_Sales";

/// Customer rating (optional column)
pub const RATING: &str = "Rating";

/// Item identifier
pub const ITEM_IDENTIFIER: &str = "Item Identifier";

/// Outlet identifier
pub const OUTLET_IDENTIFIER: &str = "Outlet Identifier";

/// Item fat content category
pub const ITEM_FAT_CONTENT: &str = "Item Fat Content";

/// Item type category
pub const ITEM_TYPE: &str = "Item Type";

/// Outlet age in years
pub const OUTLET_AGE: &str = "Outlet Age";

/// Outlet size category
pub const OUTLET_SIZE: &str = "Outlet Size";

/// Outlet location tier
pub const OUTLET_LOCATION_TYPE: &str = "Outlet Location Type";

/// Outlet type category
pub const OUTLET_TYPE: &str = "Outlet Type";
