mod decomposition;
mod plane_frame;
mod shape_properties;
