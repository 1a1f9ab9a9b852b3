mod region_service;
mod region_source;

pub use region_service::RegionService;
pub use region_source::RegionSource;
