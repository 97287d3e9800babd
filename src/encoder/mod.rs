//! External audio encoder.
//!
//! All transcoding and trimming is delegated to a subprocess. The [`Encoder`]
//! trait is the seam the procedures are written against.

mod ffmpeg;
mod job;

pub use ffmpeg::FfmpegEncoder;
pub use job::{EncodeJob, OutputCodec};

use crate::error::Result;

/// Something that can run an [`EncodeJob`] to completion.
pub trait Encoder {
    /// Run the job, blocking until the output is written.
    fn encode(&self, job: &EncodeJob) -> Result<()>;
}

impl<E: Encoder + ?Sized> Encoder for &E {
    fn encode(&self, job: &EncodeJob) -> Result<()> {
        (**self).encode(job)
    }
}
