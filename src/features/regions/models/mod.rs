mod region_level;
mod region_option;

pub use region_level::RegionLevel;
pub use region_option::RegionOption;
