mod descriptor;
mod deserialize;
mod io;

pub use descriptor::DescriptorError;
pub use deserialize::DeserializeError;
pub use io::IoError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Deserialize(#[from] DeserializeError),
}

pub type Result<T> = std::result::Result<T, Error>;
