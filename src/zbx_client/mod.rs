pub(crate) mod client;
pub(crate) mod ops;
pub(crate) mod params;
pub(crate) mod rpc;
pub(crate) mod version;

pub use client::ZbxClient;
pub use ops::Resource;
pub use params::Params;
pub use version::ApiVersion;
