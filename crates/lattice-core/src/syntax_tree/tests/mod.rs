mod merge_properties;
mod outline;
