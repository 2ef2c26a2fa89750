//! Presenter registration and signature inspection.
//!
//! A presenter type declares, once, which methods templates may call and
//! the call shape of each ([`Capability`]). The resulting
//! [`PresenterDescriptor`] is the only thing the reference compiler ever
//! looks at; nothing is discovered at runtime.

mod arguments;
mod capability;
mod descriptor;
mod error;
mod value;

pub use arguments::Arguments;
pub use capability::Arity;
pub use capability::Capability;
pub use descriptor::DescriptorBuilder;
pub use descriptor::Handler;
pub use descriptor::Presenter;
pub use descriptor::PresenterDescriptor;
pub use descriptor::Signatures;
pub use error::PresenterError;
pub use error::UnavailableMethod;
pub use value::Value;
