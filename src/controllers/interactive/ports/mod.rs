pub mod texture_sink;
