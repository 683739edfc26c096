mod properties;
mod store_layouts;
