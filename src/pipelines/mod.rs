pub use self::fsi_pipeline::FsiPipeline;

mod fsi_pipeline;
