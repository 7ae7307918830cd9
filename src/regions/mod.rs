pub mod resolve_region;
