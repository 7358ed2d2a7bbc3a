mod decode_bad;
mod property_partition;
