pub mod catalog_service;
pub mod pricing_service;
