pub mod bed_source;
pub mod region;

// re-export for cleaner imports
pub use self::bed_source::BedSource;
pub use self::region::Region;
