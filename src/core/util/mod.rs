pub mod pixel_to_device_coords;
