//! Page Components for Shopdash
//!
//! - **AttributeDetailsPage**: values of one attribute with the value dialogs

pub mod attribute_details;

pub use attribute_details::AttributeDetailsPage;
